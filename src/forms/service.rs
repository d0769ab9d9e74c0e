use super::{
    enums::{form_layout::FormLayout, mode::Mode},
    models::form_state::FormState,
    source::FormSource,
    util::parse,
};

pub fn extract(source: &impl FormSource, layout: FormLayout) -> FormState {
    let ids = layout.field_ids();

    let mode = source
        .selected(ids.mode_group)
        .and_then(|selected| selected.parse::<Mode>().ok())
        .unwrap_or_default();

    let state = FormState {
        mode,
        prompt: source.value(ids.prompt).unwrap_or_default(),
        media: parse::comma_list(source.value(ids.media).as_deref()),
        temperature: parse::lenient_float(
            source.value(ids.temperature).as_deref(),
            FormLayout::DEFAULT_TEMPERATURE,
        ),
        top_k: parse::lenient_int(
            source.value(ids.top_k).as_deref(),
            FormLayout::DEFAULT_TOP_K,
        ),
        max_steps: parse::lenient_int(
            source.value(ids.max_steps).as_deref(),
            layout.default_max_steps(),
        ),
        lightning_invoice: parse::non_empty(source.value(ids.lightning_invoice)),
        free_local: source.checked(ids.free_local),
        allow_network: source.checked(ids.allow_network),
        axiom_set: source.value(ids.axiom_set).unwrap_or_default(),
        payment_token: match ids.payment_token {
            Some(id) => parse::non_empty(source.value(id)),
            None => None,
        },
    };

    tracing::debug!(
        mode = %state.mode,
        layout = layout.value(),
        prompt_len = state.prompt.len(),
        media = ?state.media,
        temperature = state.temperature,
        top_k = state.top_k,
        max_steps = state.max_steps,
        "extracted form state"
    );

    state
}
