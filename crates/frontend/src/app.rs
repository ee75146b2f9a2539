use crate::usecases::u501_analyze_logs::AnalyzeLogsPage;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <AnalyzeLogsPage />
        </ConfigProvider>
    }
}
