use askama::Template;

#[derive(Template)]
#[template(path = "index.html")]
pub struct SubmitForm<'a> {
    pub error: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "results.html")]
pub struct AnalysisPage<'a> {
    pub name: &'a str,
    pub analysis: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_form_renders_error_banner() {
        let clean = SubmitForm { error: None }.render().unwrap();
        assert!(!clean.contains("submission-error"));

        let failed = SubmitForm {
            error: Some("Submission failed, please try again."),
        }
        .render()
        .unwrap();
        assert!(failed.contains("submission-error"));
        assert!(failed.contains("Submission failed, please try again."));
    }

    #[test]
    fn test_analysis_page_shows_text_verbatim() {
        let page = AnalysisPage {
            name: "Asha",
            analysis: "Strengths: ... ATS Score: 82",
        }
        .render()
        .unwrap();
        assert!(page.contains("Strengths: ... ATS Score: 82"));
        assert!(page.contains("Asha"));
    }
}
