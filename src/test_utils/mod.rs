#![allow(missing_docs)]

pub(crate) mod http;
pub(crate) mod logs;

pub(crate) use http::{assert_content_type, parse_json_body};
pub(crate) use logs::capture_logs;
