// src/tests/pipeline_tests.rs

//! one whole-pipeline test: tokens → parameters → read → filter → count →
//! write

#![allow(non_snake_case)]

use crate::analysis::counter::count_addresses;
use crate::analysis::filter::filter_records;
use crate::parse::parameters::resolve_args;
use crate::printer::results::write_results;
use crate::readers::logreader::read_records;
use crate::tests::common::{create_temp_file, ntf_fpath};

#[test]
fn test_pipeline_subnet_and_window() {
    let ntf_log = create_temp_file(
        "192.168.1.10:2024-04-01 10:35:09\n\
         192.168.1.20:2024-04-01 11:02:44\n\
         192.168.1.10:2024-04-02 09:15:00\n\
         192.168.2.10:2024-04-02 09:15:00\n\
         192.168.1.30:2024-04-09 00:00:00\n\
         garbage line\n",
    );
    let ntf_output = create_temp_file("");
    let path_output = ntf_fpath(&ntf_output);
    let parameters = resolve_args(&[
        "--file-log".to_owned(), ntf_fpath(&ntf_log),
        "--file-output".to_owned(), path_output.clone(),
        "--address-start".to_owned(), "192.168.1.0".to_owned(),
        "--address-mask".to_owned(), "255.255.255.0".to_owned(),
        "--time-start".to_owned(), "01.04.2024".to_owned(),
        "--time-end".to_owned(), "03.04.2024".to_owned(),
    ])
    .unwrap();
    let records = read_records(&parameters.path_log).unwrap();
    // the garbage line was skipped
    assert_eq!(records.len(), 5);
    let filtered = filter_records(
        records,
        parameters.address_start,
        parameters.address_mask,
        parameters.time_start,
        parameters.time_end,
    );
    // 192.168.2.10 is outside the range, 192.168.1.30 is outside the window
    assert_eq!(filtered.len(), 3);
    let counts = count_addresses(&filtered);
    write_results(&parameters.path_output, &counts).unwrap();
    let content = std::fs::read_to_string(path_output.as_str()).unwrap();
    assert_eq!(content, "192.168.1.10 - 2\n192.168.1.20 - 1\n");
}
