use httpmock::prelude::*;

pub const LOGIN_PAGE: &str = r#"<html><body><form id="fm1" method="post">
    <input type="hidden" name="lt" value="LT-9-xyz-cas.uni-mannheim.de" />
</form></body></html>"#;

pub const OVERVIEW: &str = r#"<html><body>
    <a href="/qisserver/rds?state=notenspiegel&amp;struct=auswahlBaum">Notenspiegel</a>
</body></html>"#;

pub const RESULTS: &str = r#"<html><body><table>
  <tr>
    <th class="Konto">Status</th>
    <th class="Konto">Prüfungsname</th>
    <th class="Konto">Semester</th>
    <th class="Konto">Note</th>
    <th class="Konto">ECTS</th>
  </tr>
  <tr>
    <td class="posrecords">bestanden</td>
    <td class="posrecords">Analysis I</td>
    <td class="posrecords">WS 20/21</td>
    <td class="posrecords">2,0</td>
    <td class="posrecords"><!-- document.write(Math.round(6.0*10)/10); //--></td>
  </tr>
  <tr>
    <td class="posrecords">nicht bestanden</td>
    <td class="posrecords">Statistik</td>
    <td class="posrecords">SS 21</td>
    <td class="posrecords">5,0</td>
    <td class="posrecords"><!-- document.write(Math.round(5.0*10)/10); //--></td>
  </tr>
  <tr>
    <td class="posrecords">bestanden</td>
    <td class="posrecords">Datenbanken</td>
    <td class="posrecords">SS 21</td>
    <td class="posrecords">4,0</td>
    <td class="posrecords"><!-- document.write(Math.round(3.0*10)/10); //--></td>
  </tr>
</table></body></html>"#;

/// Mock CAS login plus QIS portal. With `with_link = false` the overview
/// page lacks the results link, as after a rejected login.
pub fn mock_portal(server: &MockServer, with_link: bool) {
    server.mock(|when, then| {
        when.method(GET).path("/cas/login");
        then.status(200).body(LOGIN_PAGE);
    });
    server.mock(|when, then| {
        when.method(POST).path("/cas/login");
        then.status(200)
            .header("set-cookie", "JSESSIONID=0815; Path=/")
            .body("ok");
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/qisserver/rds")
            .query_param("state", "user")
            .query_param("topitem", "pruefungen");
        then.status(200)
            .body(if with_link { OVERVIEW } else { "<html></html>" });
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/qisserver/rds")
            .query_param("state", "notenspiegel")
            .header("cookie", "JSESSIONID=0815");
        then.status(200).body(RESULTS);
    });
}

pub fn settings_yaml(server: &MockServer) -> String {
    format!(
        "user: jdoe\npassword: hunter2\nlogin_url: '{}'\nportal_url: '{}'\n",
        server.url("/cas/login?service=portal"),
        server.url("/qisserver/rds"),
    )
}
