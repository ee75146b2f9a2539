/// Identity of a use case as shown in the UI and in the DOM.
pub trait UseCaseMetadata {
    /// Short index, e.g. "u501"
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "analyze_logs"
    fn usecase_name() -> &'static str;

    /// Page heading
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// "u501_analyze_logs"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }

    /// Root element id, `{full_name}--usecase`, so the page can be found
    /// from the DOM inspector.
    fn page_id() -> String {
        format!("{}--usecase", Self::full_name())
    }
}
