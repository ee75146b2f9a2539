use crate::shared::icons::icon;
use crate::shared::styles;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

/// Size in characters and number of lines, shown in the viewer footer.
pub fn json_stats(json_content: &str) -> (usize, usize) {
    (json_content.chars().count(), json_content.lines().count())
}

fn copy_to_clipboard(content: String) {
    let Some(window) = web_sys::window() else {
        log::warn!("clipboard unavailable: no window");
        return;
    };
    let clipboard = window.navigator().clipboard();
    wasm_bindgen_futures::spawn_local(async move {
        let promise = clipboard.write_text(&content);
        if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
            log::warn!("clipboard write failed: {:?}", e);
        }
    });
}

fn download_json(content: &str, file_name: &str) -> Result<(), wasm_bindgen::JsValue> {
    let window = web_sys::window().ok_or_else(|| wasm_bindgen::JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("no document"))?;

    let blob_parts = js_sys::Array::new();
    blob_parts.push(&wasm_bindgen::JsValue::from_str(content));

    let blob_property_bag = web_sys::BlobPropertyBag::new();
    blob_property_bag.set_type("application/json");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&blob_parts, &blob_property_bag)?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)?;
    let link = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| wasm_bindgen::JsValue::from_str("not an anchor"))?;
    link.set_href(&url);
    link.set_download(file_name);
    link.click();

    web_sys::Url::revoke_object_url(&url)
}

/// Read-only pretty JSON panel with copy and download actions.
#[component]
pub fn JsonViewer(
    /// Already formatted JSON text
    json_content: String,
    #[prop(optional)]
    title: Option<String>,
    /// File name used by the download action
    #[prop(optional)]
    download_name: Option<String>,
) -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let (chars, lines) = json_stats(&json_content);
    let json_content_for_copy = json_content.clone();
    let json_content_for_download = json_content.clone();
    let download_name = download_name.unwrap_or_else(|| "data.json".to_string());

    let handle_copy = move |_| {
        copy_to_clipboard(json_content_for_copy.clone());
        set_copied.set(true);

        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(2000).await;
            set_copied.set(false);
        });
    };

    let handle_download = move |_| {
        if let Err(e) = download_json(&json_content_for_download, &download_name) {
            log::error!("JSON download failed: {:?}", e);
        }
    };

    view! {
        <div>
            <div style={styles::JSON_HEADER}>
                <h3>
                    {title.unwrap_or_else(|| "JSON".to_string())}
                </h3>
                <div style="display: flex; gap: 0.5rem;">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=handle_copy
                    >
                        {move || if copied.get() {
                            view! {
                                <>
                                    {icon("check")}
                                    {" Copied!"}
                                </>
                            }.into_any()
                        } else {
                            view! {
                                <>
                                    {icon("copy")}
                                    {" Copy"}
                                </>
                            }.into_any()
                        }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=handle_download
                    >
                        {icon("download")}
                        {" Download"}
                    </Button>
                </div>
            </div>

            <div>
                <pre style={styles::JSON_CONTENT}>
                    {json_content}
                </pre>
            </div>

            <div style={styles::JSON_FOOTER}>
                {"Size: "}
                <strong>{format!("{} chars", chars)}</strong>
                {" | "}
                {"Lines: "}
                <strong>{lines}</strong>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_stats() {
        assert_eq!(json_stats("{\n  \"errors\": 3\n}"), (17, 3));
        assert_eq!(json_stats("null"), (4, 1));
        assert_eq!(json_stats(""), (0, 0));
    }
}
