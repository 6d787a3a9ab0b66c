use dioxus::prelude::*;

// File upload imports
use dioxus::logger::tracing::error;
use dioxus::prelude::dioxus_elements::FileEngine;
use reqwest::multipart::{Form, Part};
use std::sync::Arc;

use super::backend::{addr_backend, UploadOutcome};
use super::svg_icons::upload_icon_svg;

/// Accepted upload extensions, matched case-insensitively.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["pdf", "docx", "txt"];
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn is_accepted_file(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_stem, ext)| ACCEPTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Validates a selected file before any bytes leave the browser. The
/// server re-checks both limits; rejecting here just saves a request.
pub fn upload_rejection(file_name: &str, num_bytes: usize) -> Option<String> {
    if !is_accepted_file(file_name) {
        return Some(format!(
            "Upload failed: {file_name} is not a PDF, DOCX, or TXT file"
        ));
    }
    if num_bytes > MAX_UPLOAD_BYTES {
        return Some(format!("Upload failed: {file_name} is larger than 10MB"));
    }
    None
}

/// User-facing notice for a settled upload.
pub fn upload_notice(outcome: &UploadOutcome) -> String {
    if outcome.success {
        format!(
            "Successfully uploaded {} document chunks",
            outcome.count.unwrap_or(0)
        )
    } else {
        format!(
            "Upload failed: {}",
            outcome.error.as_deref().unwrap_or("Unknown error")
        )
    }
}

fn failed_outcome() -> UploadOutcome {
    UploadOutcome {
        success: false,
        count: None,
        error: None,
    }
}

/// Blocking browser notification
fn alert_blocking(message: &str) {
    let script = format!(
        "window.alert({})",
        serde_json::Value::String(message.to_string())
    );
    let _ = document::eval(script.as_str());
}

/// Sends one file as a multipart request and renders the outcome as a
/// user-facing notice. Transport and application failures both settle
/// into a notice, never a panic.
async fn send_upload(file_name: String, bytes: Vec<u8>) -> String {
    let part = Part::bytes(bytes).file_name(file_name);
    let form = Form::new().part("file", part);
    let addr = format!("{}/api/upload", addr_backend());
    match reqwest::Client::new().post(addr).multipart(form).send().await {
        Ok(response) => {
            if !response.status().is_success() {
                error!("Upload request returned status {}", response.status());
                return upload_notice(&failed_outcome());
            }
            match response.json::<UploadOutcome>().await {
                Ok(outcome) => upload_notice(&outcome),
                Err(err) => {
                    error!("There was an error parsing the upload response {err:?}");
                    upload_notice(&failed_outcome())
                }
            }
        }
        Err(err) => {
            error!("There was an error uploading the document {err:?}");
            upload_notice(&failed_outcome())
        }
    }
}

/// View for uploading a single document to the backend
// based on https://github.com/DioxusLabs/dioxus/blob/main/examples/file_upload.rs
#[component]
pub fn upload_area() -> Element {
    let mut is_uploading = use_signal(|| false);

    let read_and_upload = move |file_engine: Arc<dyn FileEngine>| async move {
        let files = file_engine.files();
        let Some(file_name) = files.first().cloned() else {
            return;
        };
        is_uploading.set(true);
        let notice = match file_engine.read_file(&file_name).await {
            Some(bytes) => match upload_rejection(&file_name, bytes.len()) {
                Some(rejection) => rejection,
                None => send_upload(file_name, bytes).await,
            },
            None => {
                error!("There was an error reading {file_name}");
                upload_notice(&failed_outcome())
            }
        };
        alert_blocking(notice.as_str());
        // Re-enable the picker on every path, including failures.
        is_uploading.set(false);
    };

    let upload_file = move |evt: FormEvent| async move {
        if is_uploading() {
            return;
        }
        if let Some(file_engine) = evt.files() {
            read_and_upload(file_engine).await;
        }
    };

    rsx! {
        div {
            class: "file_upload_form",
            div {
                id: "file_upload_form",
                h2 { "Upload Document" },
                div {
                    class: "drop_box",
                    label {
                        r#for: "docreader",
                        svg { dangerous_inner_html: upload_icon_svg() },
                        p { "Click to upload a document" },
                        p { "PDF, DOCX, TXT (MAX. 10MB)" },
                    }
                    input {
                        r#type: "file",
                        accept: ".pdf,.docx,.txt",
                        id: "docreader",
                        disabled: is_uploading(),
                        onchange: upload_file,
                    },
                }
                if is_uploading() {
                    p { class: "upload_status", "Uploading..." }
                }
            }
        }
    }
}
