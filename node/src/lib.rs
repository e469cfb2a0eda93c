//! Node.js bindings for dcmcjpeg-rs using napi-rs.
//!
//! Argument arity and type validation happen in the N-API marshaling layer;
//! the function body only sees two well-formed strings.

use std::sync::Once;

use napi_derive::napi;

static INIT_LOGGING: Once = Once::new();

/// Convert the DICOM file at `input_path` to the JPEG Lossless (Process 14
/// SV1) transfer syntax, writing the result to `output_path`.
///
/// Returns `"successfully converted"`; throws an `Error` carrying the
/// conversion failure message otherwise.
#[napi]
pub fn dcmcjpeg(input_path: String, output_path: String) -> napi::Result<String> {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    });

    dcmcjpeg_rs::convert_file(&input_path, &output_path)
        .map(|()| "successfully converted".to_string())
        .map_err(|error| napi::Error::from_reason(error.to_string()))
}
