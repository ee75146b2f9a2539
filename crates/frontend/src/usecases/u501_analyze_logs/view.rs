//! Analyze Logs - View Component

use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_analyze_logs::request::{accept_attribute, has_accepted_extension};
use contracts::usecases::u501_analyze_logs::AnalyzeLogs;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::model::{HttpSubmissionService, LogFile};
use super::result_view::ResultView;
use super::view_model::{AlertNotifier, FormController};
use crate::shared::icons::icon;
use crate::shared::styles;

#[component]
#[allow(non_snake_case)]
pub fn AnalyzeLogsPage() -> impl IntoView {
    let service = HttpSubmissionService::from_location();
    log::debug!("analysis endpoint: {}", service.endpoint());
    let controller: FormController<web_sys::File, _, _> =
        FormController::new(service, AlertNotifier);
    let state = controller.state();
    // Rc inside; keep it behind a Copy handle for the event closures
    let controller = StoredValue::new_local(controller);

    let handle_file_select = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            controller.with_value(|c| c.select_file(file));
        }
    };

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let controller = controller.get_value();
        leptos::task::spawn_local(async move {
            let outcome = controller.submit().await;
            log::debug!("submit finished: {:?}", outcome);
        });
    };

    let file_info = move || {
        state.with(|s| {
            s.selected_file()
                .map(|f| (f.file_name(), f.size_bytes()))
        })
    };

    view! {
        <div id={AnalyzeLogs::page_id()} style={styles::PAGE}>
            <h2>{AnalyzeLogs::display_name()}</h2>
            <p style={styles::MUTED_TEXT}>{AnalyzeLogs::description()}</p>
            <form on:submit=handle_submit style="margin-bottom: 1rem;">
                <div style={styles::ROW}>
                    <label style={styles::BUTTON_PRIMARY} for="log-file-input">
                        {icon("file")}
                        " Choose log file"
                    </label>
                    <input
                        id="log-file-input"
                        type="file"
                        accept=accept_attribute()
                        on:change=handle_file_select
                        style={styles::HIDDEN}
                    />
                    {move || match file_info() {
                        Some((name, size)) => view! {
                            <span>
                                <strong>{name}</strong>
                                {format!(" ({:.2} KB)", size as f64 / 1024.0)}
                            </span>
                        }.into_any(),
                        None => view! {
                            <span style="color: #666;">"No file selected"</span>
                        }.into_any(),
                    }}
                </div>

                {move || {
                    file_info()
                        .filter(|(name, _)| !has_accepted_extension(name))
                        .map(|(name, _)| view! {
                            <div style={styles::WARNING_BOX}>
                                {icon("alert")}
                                <span>
                                    {format!("{} is not .ndjson or .json; it will be sent anyway", name)}
                                </span>
                            </div>
                        })
                }}

                <br />
                <input
                    type="text"
                    placeholder="Enter your prompt"
                    prop:value=move || state.with(|s| s.prompt().to_string())
                    on:input=move |ev| controller.with_value(|c| c.set_prompt(event_target_value(&ev)))
                    style="width: 300px;"
                />
                <br />
                <br />
                <button
                    type="submit"
                    style={styles::BUTTON_PRIMARY}
                    disabled=move || state.with(|s| s.is_submitting())
                >
                    {move || state.with(|s| s.submit_label())}
                </button>
            </form>

            <ResultView result=Signal::derive(move || state.with(|s| s.last_result().cloned())) />
        </div>
    }
}
