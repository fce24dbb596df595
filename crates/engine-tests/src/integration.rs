#[cfg(test)]
mod tests {
    use crate::utils::{
        PRODUCTS_CSV, SEVEN_ROWS_CSV, convert, output_path, read_output, try_convert,
        tuple_count, write_csv,
    };
    use connectors::file::csv::settings::CsvSettings;
    use engine_core::{convert::Converter, error::ConvertError, settings::ConvertSettings};
    use tracing_test::traced_test;

    // Test Settings: Default (header present, batch size 0).
    // Scenario: A blank row sits between two data rows, one value holds a single quote.
    // Expected Outcome: Two single-row statements, the blank row skipped and the quote doubled.
    #[traced_test]
    #[test]
    fn tc01() {
        let csv = write_csv("id,name\n1,O'Brien\n,\n3,Ann");
        let conversion = convert(ConvertSettings::new(csv.path(), "t"));

        assert_eq!(
            conversion.statements,
            vec![
                "INSERT INTO `t` (`id`, `name`) VALUES (1, 'O''Brien');",
                "INSERT INTO `t` (`id`, `name`) VALUES (3, 'Ann');",
            ]
        );
        assert!(logs_contain("Read CSV headers: id, name"));
        assert!(logs_contain("Target SQL column names: (`id`, `name`)"));
    }

    // Test Settings: Batch size 3.
    // Scenario: Seven data rows.
    // Expected Outcome: Three statements holding 3, 3 and 1 tuples, in input order.
    #[traced_test]
    #[test]
    fn tc02() {
        let csv = write_csv(SEVEN_ROWS_CSV);
        let conversion = convert(ConvertSettings::new(csv.path(), "numbers").with_batch_size(3));

        let counts: Vec<usize> = conversion
            .statements
            .iter()
            .map(|s| tuple_count(s))
            .collect();
        assert_eq!(counts, vec![3, 3, 1]);
        assert!(conversion.statements[0].starts_with("INSERT INTO `numbers` (`n`) VALUES (1),"));
        assert!(conversion.statements[2].ends_with("VALUES (7);"));
        assert!(logs_contain("Generated 3 INSERT statements from 7 rows"));
    }

    // Test Settings: Default.
    // Scenario: Quoted delimiters, escaped double quotes, decimals and an all-empty row.
    // Expected Outcome: Each cell classified on its own; the empty row produces nothing.
    #[test]
    fn tc03() {
        let csv = write_csv(PRODUCTS_CSV);
        let conversion = convert(ConvertSettings::new(csv.path(), "products"));

        let cols = "INSERT INTO `products` (`id`, `name`, `price`, `note`) VALUES";
        assert_eq!(
            conversion.statements,
            vec![
                format!("{cols} (1, 'Widget, large', 9.99, NULL);"),
                format!("{cols} (2, 'O''Reilly Guide', 15, 'said \"hi\"');"),
                format!("{cols} (3, 'Gadget', -0.5, 'n/a');"),
            ]
        );
        assert_eq!(conversion.rows_skipped, 1);
    }

    // Test Settings: Category id 5, output file, batch size 2.
    // Scenario: The output file already exists with other content.
    // Expected Outcome: The file is replaced; every tuple ends with the category value.
    #[test]
    fn tc04() {
        let csv = write_csv("sku,qty\nA-1,3\nB-2,4\nC-3,5\n");
        let (_dir, out) = output_path("inserts.sql");
        std::fs::write(&out, "-- stale\n").unwrap();

        let settings = ConvertSettings::new(csv.path(), "stock")
            .with_output(Some(out.clone()))
            .with_batch_size(2)
            .with_category_id(Some(5));
        Converter::new(settings).run().unwrap();

        let expected = concat!(
            "INSERT INTO `stock` (`sku`, `qty`, `category_id`) VALUES ('A-1', 3, 5),\n",
            "('B-2', 4, 5);\n",
            "INSERT INTO `stock` (`sku`, `qty`, `category_id`) VALUES ('C-3', 5, 5);\n",
        );
        assert_eq!(read_output(&out), expected);
    }

    // Test Settings: Output file.
    // Scenario: The input file does not exist.
    // Expected Outcome: A not-found error and no output file.
    #[test]
    fn tc05() {
        let (_dir, out) = output_path("never.sql");
        let missing = out.with_file_name("missing.csv");

        let settings = ConvertSettings::new(&missing, "t").with_output(Some(out.clone()));
        let err = Converter::new(settings).run().unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            format!("CSV file not found at '{}'", missing.display())
        );
        assert!(!out.exists());
    }

    // Test Settings: No header, tab delimiter.
    // Scenario: Rows of different lengths.
    // Expected Outcome: No column clause, each tuple keeps its own field count.
    #[traced_test]
    #[test]
    fn tc06() {
        let csv = write_csv("1\tx\t2.5\n2\ty\n");
        let settings =
            ConvertSettings::new(csv.path(), "raw").with_csv(CsvSettings::new('\t', false));
        let conversion = convert(settings);

        assert_eq!(
            conversion.statements,
            vec![
                "INSERT INTO `raw` VALUES (1, 'x', 2.5);",
                "INSERT INTO `raw` VALUES (2, 'y');",
            ]
        );
        assert!(logs_contain("No header row assumed in CSV."));
    }

    // Test Settings: Output file.
    // Scenario: A data row has more fields than the header.
    // Expected Outcome: A field-count error naming the line, and nothing written.
    #[test]
    fn tc07() {
        let csv = write_csv("a,b\n1,2\n3,4,5\n");
        let (_dir, out) = output_path("partial.sql");

        let settings = ConvertSettings::new(csv.path(), "t").with_output(Some(out.clone()));
        let err = Converter::new(settings).run().unwrap_err();

        assert!(matches!(
            err,
            ConvertError::FieldCount {
                line: 3,
                expected: 2,
                found: 3
            }
        ));
        assert!(!err.is_not_found());
        assert!(!out.exists());
    }

    // Test Settings: Several batch sizes.
    // Scenario: Blank rows scattered through the file, including at the end. Under a
    //           multi-column header the blank rows are shorter than the header.
    // Expected Outcome: Tuple count always equals the number of non-blank rows.
    #[test]
    fn tc08() {
        let inputs = [
            "v\n1\n\n2\n \n3\n4\n5\n\" \"\n",
            "id,name\n1,a\n   \n2,b\n3,c\n,\n4,d\n5,e\n \n",
            "a,b,c\n1,2,3\n,\n4,5,6\n\t\n7,8,9\n,,\n10,11,12\n13,14,15\n,\n",
        ];

        for content in inputs {
            let csv = write_csv(content);
            for batch_size in [0, 1, 2, 4, 100] {
                let conversion =
                    convert(ConvertSettings::new(csv.path(), "t").with_batch_size(batch_size));
                let tuples: usize = conversion.statements.iter().map(|s| tuple_count(s)).sum();
                assert_eq!(tuples, 5, "batch size {batch_size} for {content:?}");
                assert_eq!(conversion.rows_converted, 5);
            }
        }
    }

    // Test Settings: No header, category id.
    // Scenario: Category supplied without CSV column names.
    // Expected Outcome: Only `category_id` is named and a column-order warning is logged.
    #[traced_test]
    #[test]
    fn tc09() {
        let csv = write_csv("10,abc\n");
        let settings = ConvertSettings::new(csv.path(), "t")
            .with_csv(CsvSettings::new(',', false))
            .with_category_id(Some(3));
        let conversion = convert(settings);

        assert_eq!(
            conversion.statements,
            vec!["INSERT INTO `t` (`category_id`) VALUES (10, 'abc', 3);"]
        );
        assert!(logs_contain("Adding column: 'category_id'"));
        assert!(logs_contain("ensure the table column order"));
    }

    // Test Settings: Non-ASCII delimiter.
    // Scenario: Settings rejected before the input is opened.
    // Expected Outcome: Invalid settings, even for a missing file.
    #[test]
    fn tc10() {
        let settings = ConvertSettings::new("does-not-exist.csv", "t")
            .with_csv(CsvSettings::new('¦', true));
        let err = try_convert(settings).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidSettings(_)));
    }

    // Test Settings: Default, then batch size 10.
    // Scenario: Whitespace-only and delimiter-only rows between data rows under a header.
    // Expected Outcome: The short rows are skipped as blank; two INSERTs, or one with two tuples.
    #[traced_test]
    #[test]
    fn tc11() {
        let csv = write_csv("id,name\n1,a\n   \n2,b\n");
        let conversion = convert(ConvertSettings::new(csv.path(), "t"));
        assert_eq!(
            conversion.statements,
            vec![
                "INSERT INTO `t` (`id`, `name`) VALUES (1, 'a');",
                "INSERT INTO `t` (`id`, `name`) VALUES (2, 'b');",
            ]
        );

        let csv = write_csv("a,b,c\n1,2,3\n,\n4,5,6\n");
        let conversion = convert(ConvertSettings::new(csv.path(), "t"));
        assert_eq!(
            conversion.statements,
            vec![
                "INSERT INTO `t` (`a`, `b`, `c`) VALUES (1, 2, 3);",
                "INSERT INTO `t` (`a`, `b`, `c`) VALUES (4, 5, 6);",
            ]
        );
        assert!(logs_contain("Skipping blank row at line 3"));

        let conversion = convert(ConvertSettings::new(csv.path(), "t").with_batch_size(10));
        assert_eq!(
            conversion.statements,
            vec!["INSERT INTO `t` (`a`, `b`, `c`) VALUES (1, 2, 3),\n(4, 5, 6);"]
        );
    }
}
