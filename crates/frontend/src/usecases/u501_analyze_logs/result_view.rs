//! Analyze Logs - result panel

use contracts::usecases::u501_analyze_logs::{AnalysisBody, AnalysisSummary, ErrorEnvelope};
use leptos::prelude::*;
use serde_json::Value;

use crate::shared::icons::icon;
use crate::shared::json_viewer::JsonViewer;
use crate::shared::styles;

/// Two-space indented JSON, or nothing when there is no result.
pub fn render_result(result: Option<&Value>) -> Option<String> {
    result.map(|value| serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()))
}

fn analysis_strip(summary: AnalysisSummary) -> AnyView {
    view! {
        <div style={styles::SUMMARY_BOX}>
            {summary.counts.map(|counts| view! {
                <div>
                    {format!(
                        "Records: {} total, {} filtered, {} highlighted",
                        counts.total_records, counts.filtered_records, counts.highlighted_records
                    )}
                </div>
            })}
            {(!summary.summary.is_empty()).then(|| view! {
                <p style="margin: 0.4rem 0 0;"><strong>"Summary: "</strong>{summary.summary.clone()}</p>
            })}
            {(!summary.reason.is_empty()).then(|| view! {
                <p style="margin: 0.4rem 0 0;"><strong>"Reason: "</strong>{summary.reason.clone()}</p>
            })}
            {summary.model.map(|model| view! {
                <span style="color: #666; font-size: 0.85rem;">{format!("Model: {}", model)}</span>
            })}
        </div>
    }
    .into_any()
}

fn error_strip(envelope: ErrorEnvelope) -> AnyView {
    view! {
        <div style={styles::ERROR_BOX}>
            {icon("alert")}
            <span>
                {envelope.error}
                {envelope.details.map(|details| format!(": {}", details))}
            </span>
        </div>
    }
    .into_any()
}

/// Shown only while there is a result.
#[component]
pub fn ResultView(#[prop(into)] result: Signal<Option<Value>>) -> impl IntoView {
    move || {
        result
            .with(|value| {
                let value = value.as_ref()?;
                Some((render_result(Some(value))?, AnalysisBody::classify(value)))
            })
            .map(|(json, body)| {
                let strip = match body {
                    AnalysisBody::Analysis(summary) => Some(analysis_strip(summary)),
                    AnalysisBody::Error(envelope) => Some(error_strip(envelope)),
                    AnalysisBody::Opaque => None,
                };
                view! {
                    <div>
                        {strip}
                        <JsonViewer
                            json_content=json
                            title="Analysis Result".to_string()
                            download_name="analysis_result.json".to_string()
                        />
                    </div>
                }
            })
    }
}
