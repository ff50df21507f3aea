use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::io::Write;
use tempfile::NamedTempFile;

fn storefront() -> Command {
    let mut cmd = Command::cargo_bin("storefront").unwrap();
    cmd.env_remove("STOREFRONT_CONFIG")
        .env_remove("STOREFRONT_DEBUG_LOG");
    cmd
}

fn parse_json_output(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("Failed to parse JSON output")
}

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

mod paginate_tests {
    use super::*;

    #[test]
    fn test_paginate_text_middle() {
        storefront()
            .args(["paginate", "--current", "5", "--total", "10"])
            .assert()
            .success()
            .stdout("Previous 1 … 4 [5] 6 … 10 Next\n");
    }

    #[test]
    fn test_paginate_text_edges() {
        storefront()
            .args(["paginate", "--current", "1", "--total", "5"])
            .assert()
            .success()
            .stdout("(Previous) [1] 2 … 5 Next\n");

        storefront()
            .args(["paginate", "--current", "5", "--total", "5"])
            .assert()
            .success()
            .stdout("Previous 1 … 4 [5] (Next)\n");
    }

    #[test]
    fn test_paginate_single_page() {
        storefront()
            .args(["paginate", "--total", "1"])
            .assert()
            .success()
            .stdout("(Previous) [1] (Next)\n");
    }

    #[test]
    fn test_paginate_json() {
        let output = storefront()
            .args(["paginate", "--current", "2", "--total", "5", "--format", "json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json = parse_json_output(&output);
        assert!(json["success"].as_bool().unwrap());
        assert_eq!(json["data"]["current"], 2);
        assert_eq!(json["data"]["total"], 5);
        assert_eq!(json["data"]["has_previous"], true);
        assert_eq!(json["data"]["has_next"], true);

        let window = json["data"]["window"].as_array().unwrap();
        assert_eq!(window.len(), 5);
        assert_eq!(window[0]["kind"], "page");
        assert_eq!(window[0]["page"], 1);
        assert_eq!(window[3]["kind"], "ellipsis");
        assert_eq!(window[4]["page"], 5);

        let controls = json["data"]["controls"].as_array().unwrap();
        assert_eq!(controls.len(), 7);
        assert_eq!(controls[0]["control"]["kind"], "previous");
        assert_eq!(controls[2]["active"], true);
    }

    #[test]
    fn test_paginate_from_result_count() {
        storefront()
            .args(["paginate", "--current", "3", "--count", "30"])
            .assert()
            .success()
            .stdout("Previous 1 2 [3] (Next)\n");

        storefront()
            .args(["paginate", "--count", "30", "--per-page", "5"])
            .assert()
            .success()
            .stdout("(Previous) [1] 2 … 6 Next\n");
    }

    #[test]
    fn test_paginate_last_of_maximum_pages() {
        let max = usize::MAX.to_string();
        storefront()
            .args(["paginate", "--current", &max, "--total", &max])
            .assert()
            .success()
            .stdout(format!("Previous 1 … {} [{max}] (Next)\n", usize::MAX - 1));
    }

    #[test]
    fn test_browse_page_count_overflow_rejected() {
        storefront()
            .args(["browse", "--total", &(usize::MAX / 2).to_string()])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("exceed the supported result count"));
    }

    #[test]
    fn test_paginate_current_out_of_range() {
        let output = storefront()
            .args(["paginate", "--current", "6", "--total", "5"])
            .assert()
            .failure()
            .code(1)
            .get_output()
            .stderr
            .clone();

        let json = parse_json_output(&output);
        assert!(!json["success"].as_bool().unwrap());
        assert!(json["error"].as_str().unwrap().contains("outside"));
    }

    #[test]
    fn test_paginate_zero_pages_rejected() {
        storefront()
            .args(["paginate", "--total", "0"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("at least one page"));
    }

    #[test]
    fn test_paginate_requires_page_count() {
        storefront()
            .args(["paginate", "--current", "1"])
            .assert()
            .failure();
    }

    #[test]
    fn test_paginate_total_and_count_conflict() {
        storefront()
            .args(["paginate", "--total", "3", "--count", "30"])
            .assert()
            .failure();
    }
}

mod query_tests {
    use super::*;

    #[test]
    fn test_query_defaults() {
        storefront()
            .args(["query"])
            .assert()
            .success()
            .stdout("minPrice=0&maxPrice=1000&sortBy=relevance&page=1&limit=12\n");
    }

    #[test]
    fn test_query_with_filters() {
        storefront()
            .args([
                "query",
                "--search",
                "space war",
                "--category",
                "action",
                "--max-price",
                "50",
                "--tag",
                "co-op",
                "--tag",
                "pixel",
                "--sort-by",
                "rating",
                "--page",
                "2",
                "--limit",
                "24",
            ])
            .assert()
            .success()
            .stdout(
                "search=space+war&category=action&minPrice=0&maxPrice=50&tags=co-op%2Cpixel&sortBy=rating&page=2&limit=24\n",
            );
    }

    #[test]
    fn test_query_json() {
        let output = storefront()
            .args(["query", "--category", "all", "--format", "json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json = parse_json_output(&output);
        assert!(json["success"].as_bool().unwrap());
        assert_eq!(
            json["data"]["query"],
            "minPrice=0&maxPrice=1000&sortBy=relevance&page=1&limit=12"
        );
        let params = json["data"]["params"].as_array().unwrap();
        assert_eq!(params[0][0], "minPrice");
        assert_eq!(params.len(), 5);
    }

    #[test]
    fn test_query_unknown_sort() {
        storefront()
            .args(["query", "--sort-by", "cheapest"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Unknown sort option"));
    }

    #[test]
    fn test_query_bad_price_range() {
        storefront()
            .args(["query", "--min-price", "200", "--max-price", "100"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Invalid price range"));
    }
}

mod config_tests {
    use super::*;

    #[test]
    fn test_config_labels_and_page_size() {
        let config = config_file(
            r#"
[results]
items_per_page = 10

[pagination]
previous_label = "<"
next_label = ">"
ellipsis = ".."
"#,
        );

        storefront()
            .args(["--config", config.path().to_str().unwrap()])
            .args(["paginate", "--current", "5", "--count", "100"])
            .assert()
            .success()
            .stdout("< 1 .. 4 [5] 6 .. 10 >\n");
    }

    #[test]
    fn test_config_from_env() {
        let config = config_file("[results]\nitems_per_page = 24\n");

        storefront()
            .env("STOREFRONT_CONFIG", config.path())
            .args(["query"])
            .assert()
            .success()
            .stdout(predicate::str::ends_with("limit=24\n"));
    }

    #[test]
    fn test_missing_config_file_fails() {
        storefront()
            .args(["--config", "/nonexistent/storefront.toml", "query"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("IO error"));
    }

    #[test]
    fn test_invalid_config_fails() {
        let config = config_file("[results]\nitems_per_page = 0\n");

        storefront()
            .args(["--config", config.path().to_str().unwrap(), "query"])
            .assert()
            .failure()
            .code(1);
    }
}

mod logging_tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_debug_log_written_to_file() {
        let log = NamedTempFile::new().unwrap();

        storefront()
            .env("STOREFRONT_DEBUG_LOG", log.path())
            .args(["paginate", "--current", "4", "--total", "9"])
            .assert()
            .success()
            .stdout("Previous 1 … 3 [4] 5 … 9 Next\n")
            .stderr("");

        let contents = fs::read_to_string(log.path()).unwrap();
        assert!(contents.contains("DEBUG"));
        assert!(contents.contains("rendering pagination"));
    }

    #[test]
    fn test_debug_log_appends() {
        let log = config_file("earlier run\n");

        storefront()
            .env("STOREFRONT_DEBUG_LOG", log.path())
            .args(["paginate", "--total", "2"])
            .assert()
            .success();

        let contents = fs::read_to_string(log.path()).unwrap();
        assert!(contents.starts_with("earlier run\n"));
        assert!(contents.contains("rendering pagination"));
    }

    #[test]
    fn test_browse_keeps_logs_off_the_terminal() {
        let output = storefront()
            .args(["browse", "--current", "9", "--total", "3"])
            .assert()
            .failure()
            .code(1)
            .get_output()
            .stderr
            .clone();

        // only the error envelope; the failure log goes to the sink
        let json = parse_json_output(&output);
        assert!(!json["success"].as_bool().unwrap());
        assert!(json["error"].as_str().unwrap().contains("outside"));
    }
}

mod completions_tests {
    use super::*;

    #[test]
    fn test_bash_completions() {
        storefront()
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("storefront"));
    }
}
