use crate::api::ChatApi;
use crate::charts::ChartSpec;
use crate::document::{Document, ids};
use crate::models::AnalyticsPayload;
use tracing::{debug, error};

pub const MESSAGES_CHART_LABEL: &str = "Messages per Day";
pub const FLAGS_CHART_LABEL: &str = "Flag Breakdown";

pub fn messages_chart(payload: &AnalyticsPayload) -> ChartSpec {
    ChartSpec::bar(
        MESSAGES_CHART_LABEL,
        payload.messages_per_day.labels.clone(),
        payload.messages_per_day.counts.clone(),
    )
}

pub fn flags_chart(payload: &AnalyticsPayload) -> ChartSpec {
    ChartSpec::pie(FLAGS_CHART_LABEL, &payload.flag_breakdown)
}

/// Writes the counters and both charts. Absent elements are skipped.
pub fn render_analytics<D: Document + ?Sized>(document: &mut D, payload: &AnalyticsPayload) {
    let counters = [
        (ids::USER_COUNT, payload.total_users),
        (ids::MESSAGE_COUNT, payload.total_messages),
        (ids::FLAGGED_COUNT, payload.total_flagged),
    ];
    for (id, value) in counters {
        if !document.set_text(id, &value.to_string()) {
            debug!("counter {id} not present");
        }
    }

    if !document.render_chart(ids::MESSAGES_CHART, &messages_chart(payload)) {
        debug!("{} not present", ids::MESSAGES_CHART);
    }
    if !document.render_chart(ids::FLAGS_CHART, &flags_chart(payload)) {
        debug!("{} not present", ids::FLAGS_CHART);
    }
}

/// Failures are logged and leave the page untouched.
pub async fn load_analytics<D: Document + ?Sized>(api: &ChatApi, document: &mut D) -> Option<AnalyticsPayload> {
    match api.fetch_analytics().await {
        Ok(payload) => {
            render_analytics(document, &payload);
            Some(payload)
        }
        Err(err) => {
            error!("Error fetching analytics data: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::ChartKind;
    use crate::document::PageDocument;
    use crate::models::MessagesPerDay;
    use std::collections::BTreeMap;

    fn payload() -> AnalyticsPayload {
        AnalyticsPayload {
            total_users: 42,
            total_messages: 1_337,
            total_flagged: 5,
            messages_per_day: MessagesPerDay {
                labels: vec!["2026-10-13".into(), "2026-10-14".into()],
                counts: vec![600, 737],
            },
            flag_breakdown: BTreeMap::from([("spam".to_string(), 3), ("harassment".to_string(), 2)]),
        }
    }

    #[test]
    fn counters_are_written_as_text() {
        let mut document = PageDocument::host_page();
        render_analytics(&mut document, &payload());

        let text = |id: &str| document.element(id).map(|element| element.text.clone());
        assert_eq!(text(ids::USER_COUNT).as_deref(), Some("42"));
        assert_eq!(text(ids::MESSAGE_COUNT).as_deref(), Some("1337"));
        assert_eq!(text(ids::FLAGGED_COUNT).as_deref(), Some("5"));
    }

    #[test]
    fn charts_are_attached_to_their_canvases() {
        let mut document = PageDocument::host_page();
        render_analytics(&mut document, &payload());

        let bar = document
            .element(ids::MESSAGES_CHART)
            .and_then(|element| element.chart.clone())
            .expect("bar chart");
        assert_eq!(bar.kind, ChartKind::Bar);
        assert_eq!(bar.labels, vec!["2026-10-13", "2026-10-14"]);
        assert_eq!(bar.dataset.data, vec![600, 737]);

        let pie = document
            .element(ids::FLAGS_CHART)
            .and_then(|element| element.chart.clone())
            .expect("pie chart");
        assert_eq!(pie.kind, ChartKind::Pie);
        assert_eq!(pie.labels, vec!["harassment", "spam"]);
        assert_eq!(pie.dataset.data, vec![2, 3]);
    }

    #[test]
    fn partial_page_still_gets_what_it_has() {
        let mut document = PageDocument::new().with_element(ids::USER_COUNT);
        render_analytics(&mut document, &payload());
        assert_eq!(document.element(ids::USER_COUNT).map(|e| e.text.as_str()), Some("42"));
        assert!(document.element(ids::FLAGS_CHART).is_none());
    }
}
