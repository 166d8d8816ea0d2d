//! Tests for hardware file rendering and writing

#[cfg(test)]
mod tests {
    use tactilegrid::io::configuration::DisplaySpec;
    use tactilegrid::io::error::TactileError;
    use tactilegrid::io::export::{ExportFormat, Exporter, PatternDocument, hardware_file_name};
    use tactilegrid::spatial::grid::GridSize;
    use tactilegrid::spatial::matrix::TactileMatrix;

    fn exporter() -> Exporter {
        Exporter::new(DisplaySpec::default())
    }

    fn diagonal() -> Option<TactileMatrix> {
        TactileMatrix::from_rows(&[vec![1, 0], vec![0, 1]]).ok()
    }

    // Tests txt is digits only with one line per row
    // Verified by separating digits with spaces
    #[test]
    fn test_txt() {
        if let Some(matrix) = diagonal() {
            assert_eq!(
                exporter().export(&matrix, ExportFormat::Txt).ok().as_deref(),
                Some("10\n01\n")
            );
        } else {
            unreachable!("diagonal matrix is valid");
        }
    }

    // Tests csv separates digits with commas and has no header
    // Verified by emitting a header row
    #[test]
    fn test_csv() {
        if let Ok(matrix) = TactileMatrix::from_rows(&[vec![1, 1, 0], vec![0, 0, 1]]) {
            assert_eq!(
                exporter().export(&matrix, ExportFormat::Csv).ok().as_deref(),
                Some("1,1,0\n0,0,1\n")
            );
        } else {
            unreachable!("2x3 matrix is valid");
        }
    }

    // Tests the microcontroller source declares dimensions and the array literal
    // Verified by omitting the separator between row literals
    #[test]
    fn test_arduino() {
        if let Some(matrix) = diagonal() {
            if let Ok(source) = exporter().export(&matrix, ExportFormat::Arduino) {
                assert!(source.starts_with("// Tactile Display Pattern - 2x2\n"));
                assert!(source.contains("// 3.0mm balls, 3.5mm spacing"));
                assert!(source.contains("const int ROWS = 2;"));
                assert!(source.contains("const int COLS = 2;"));
                assert!(source.contains("const int tactilePattern[ROWS][COLS] = {\n"));
                assert!(source.contains("  {1, 0},\n  {0, 1}\n};"));
                assert!(source.contains("raiseBall(row, col)"));
            } else {
                unreachable!("arduino rendering cannot fail");
            }
        } else {
            unreachable!("diagonal matrix is valid");
        }
    }

    // Tests the complete microcontroller source layout line by line
    // Verified by dropping the blank line before the array
    #[test]
    fn test_arduino_full_layout() {
        let expected = "// Tactile Display Pattern - 2x2\n\
                        // 3.0mm balls, 3.5mm spacing\n\
                        \n\
                        const int ROWS = 2;\n\
                        const int COLS = 2;\n\
                        \n\
                        const int tactilePattern[ROWS][COLS] = {\n\
                        \x20 {1, 0},\n\
                        \x20 {0, 1}\n\
                        };\n\
                        \n\
                        // Usage: if (tactilePattern[row][col] == 1) raiseBall(row, col);\n";
        if let Some(matrix) = diagonal() {
            assert_eq!(
                exporter().export(&matrix, ExportFormat::Arduino).ok().as_deref(),
                Some(expected)
            );
        } else {
            unreachable!("diagonal matrix is valid");
        }
    }

    // Tests JSON carries grid size, pattern and statistics and parses back
    // Verified by serializing the transposed pattern
    #[test]
    fn test_json_document() {
        if let Ok(matrix) = TactileMatrix::from_rows(&[vec![1, 0, 0], vec![0, 0, 0]]) {
            if let Ok(text) = exporter().export(&matrix, ExportFormat::Json) {
                let value: serde_json::Value = serde_json::from_str(&text).unwrap_or_default();
                assert_eq!(value["grid_size"]["rows"], 2);
                assert_eq!(value["grid_size"]["cols"], 3);
                assert_eq!(value["pattern"][0], serde_json::json!([1, 0, 0]));
                assert_eq!(value["statistics"]["points_raised"], 1);
                assert_eq!(value["statistics"]["coverage_percent"], 16.7);
                assert_eq!(value["statistics"]["display_width_mm"], 10.5);

                if let Ok(document) = PatternDocument::from_json(&text) {
                    assert_eq!(document.matrix().ok(), Some(matrix));
                    assert_eq!(document.display, DisplaySpec::default());
                } else {
                    unreachable!("exported JSON parses back");
                }
            } else {
                unreachable!("JSON rendering succeeds");
            }
        } else {
            unreachable!("2x3 matrix is valid");
        }
    }

    // Tests documents whose grid size disagrees with the pattern are rejected
    // Verified by skipping the dimension check
    #[test]
    fn test_json_dimension_mismatch() {
        if let Some(matrix) = diagonal() {
            let mut document = PatternDocument::new(&matrix, DisplaySpec::default());
            document.grid_size.rows = 3;
            if let Ok(text) = serde_json::to_string(&document) {
                assert!(matches!(
                    PatternDocument::from_json(&text),
                    Err(TactileError::InvalidPattern { .. })
                ));
            } else {
                unreachable!("document serializes");
            }
        } else {
            unreachable!("diagonal matrix is valid");
        }
    }

    // Tests format names, extensions and rejection of unknown formats
    // Verified by accepting unknown names as txt
    #[test]
    fn test_format_parsing() {
        assert_eq!("ARDUINO".parse::<ExportFormat>().ok(), Some(ExportFormat::Arduino));
        assert_eq!("ino".parse::<ExportFormat>().ok(), Some(ExportFormat::Arduino));
        assert_eq!(" csv".parse::<ExportFormat>().ok(), Some(ExportFormat::Csv));
        assert!(matches!(
            "xml".parse::<ExportFormat>(),
            Err(TactileError::UnsupportedFormat { format }) if format == "xml"
        ));
        if let Some(matrix) = diagonal() {
            assert!(exporter().export_named(&matrix, "pdf").is_err());
            assert_eq!(
                exporter().export_named(&matrix, "txt").ok().as_deref(),
                Some("10\n01\n")
            );
        }
    }

    // Tests exporting never modifies the pattern
    // Verified by inverting inside export
    #[test]
    fn test_export_is_read_only() {
        if let Some(matrix) = diagonal() {
            let before = matrix.clone();
            for format in ExportFormat::ALL {
                assert!(exporter().export(&matrix, format).is_ok());
            }
            assert_eq!(matrix, before);
        }
    }

    // Tests hardware file names embed the grid and extension
    // Verified by using the format name as extension
    #[test]
    fn test_hardware_file_name() {
        let grid = GridSize::square(8);
        assert_eq!(
            hardware_file_name("house", grid, ExportFormat::Arduino),
            "house_8x8.ino"
        );
        assert_eq!(
            hardware_file_name("house", GridSize::new(4, 16), ExportFormat::Csv),
            "house_4x16.csv"
        );
    }

    // Tests files are written with parent directories created
    // Verified by skipping create_dir_all
    #[test]
    fn test_write_hardware_file() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory is available");
        };
        let path = dir.path().join("nested").join("pattern_2x2.txt");

        if let Some(matrix) = diagonal() {
            let written = exporter().write_hardware_file(&matrix, &path, ExportFormat::Txt);
            assert_eq!(written.ok(), Some(path.clone()));
            assert_eq!(std::fs::read_to_string(&path).ok().as_deref(), Some("10\n01\n"));
        }
    }

    // Tests a directory in the way surfaces as a file system error
    // Verified by ignoring the write result
    #[test]
    fn test_write_hardware_file_error() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory is available");
        };
        if let Some(matrix) = diagonal() {
            let result = exporter().write_hardware_file(&matrix, dir.path(), ExportFormat::Csv);
            assert!(matches!(result, Err(TactileError::FileSystem { .. })));
        }
    }
}
