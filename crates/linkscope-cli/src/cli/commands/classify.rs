//! `linkscope classify <url>` – print the validation state only.

use linkscope_core::classify;
use linkscope_core::labels::Labels;

pub fn run_classify(url: &str, labels: &Labels) {
    println!("{}", labels.state_line(classify(url)));
}
