//! CSV file integration tests

#[cfg(test)]
mod tests {
    use crate::common::write_file;
    use crate::{assert_err, assert_ok};
    use link_checker::core::csv::{CsvLoader, OUTPUT_COLUMNS, write_results_path};
    use link_checker::core::types::{InputRow, ResultRow, Verdict};
    use link_checker::utils::error::LinkCheckError;

    // ==================== Loading ====================

    #[test]
    fn test_load_file_trims_and_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "input.csv",
            "business_name,URL,notes\n  Zeta Corp ,https://zeta.example,x\nAlpha LLC,  http://alpha.example/about ,\n",
        );

        let rows = assert_ok!(CsvLoader::new().load_path(&path));
        assert_eq!(
            rows,
            vec![
                InputRow::new("Zeta Corp", "https://zeta.example"),
                InputRow::new("Alpha LLC", "http://alpha.example/about"),
            ]
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = assert_err!(CsvLoader::new().load_path(&dir.path().join("missing.csv")));
        assert!(matches!(err, LinkCheckError::Io(_)));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_quoted_business_names() {
        let rows = assert_ok!(CsvLoader::new().load_str(
            "business_name,URL\n\"Smith, Jones & Co\",https://sjc.example\n"
        ));
        assert_eq!(rows[0].business_name, "Smith, Jones & Co");
    }

    #[test]
    fn test_semicolon_delimiter() {
        let rows = assert_ok!(
            CsvLoader::new()
                .with_delimiter(b';')
                .load_str("business_name;URL\nAcme;https://acme.example\n")
        );
        assert_eq!(rows, vec![InputRow::new("Acme", "https://acme.example")]);
    }

    #[test]
    fn test_scheme_less_url_is_fatal() {
        let err = assert_err!(
            CsvLoader::new().load_str("business_name,URL\nAcme,acme.example\n")
        );
        assert!(err.is_fatal());
        assert!(err.to_string().contains("acme.example"));
    }

    // ==================== Writing ====================

    #[test]
    fn test_written_results_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        let rows = vec![
            ResultRow {
                business_name: "Acme, Inc".to_string(),
                url: "https://acme.example".to_string(),
                scraped_content: Some("Acme \"widgets\"\nsince 1920".to_string()),
                website_working: true,
                result: Some(Verdict::Invalid),
            },
            ResultRow::not_working(&InputRow::new("Down", "https://down.example")),
        ];

        assert_ok!(write_results_path(&path, &rows));
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with(&OUTPUT_COLUMNS.join(",")));

        let loaded = assert_ok!(CsvLoader::new().load_results_path(&path));
        assert_eq!(loaded, rows);
    }

    #[test]
    fn test_results_file_rejected_as_plain_input_columns_only() {
        let err = assert_err!(CsvLoader::new().load_results_str(
            "business_name,URL\nAcme,https://acme.example\n"
        ));
        assert!(matches!(err, LinkCheckError::Validation(_)));
    }

    #[test]
    fn test_results_file_with_bad_flag() {
        let err = assert_err!(CsvLoader::new().load_results_str(
            "business_name,URL,scraped_content,website_working,result\nA,https://a.example,,MAYBE,\n"
        ));
        assert!(matches!(err, LinkCheckError::Csv(_)));
    }
}
