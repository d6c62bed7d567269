use crisisdesk_app::domain::{Persona, Platform};
use leptos::prelude::*;

#[derive(Debug, Clone)]
pub struct ComplaintSubmission {
    pub complaint: String,
    pub persona_id: String,
    pub platform_id: String,
    pub auto_language: bool,
}

#[component]
pub fn ComplaintForm(
    personas: Vec<Persona>,
    platforms: Vec<Platform>,
    #[prop(into)] on_submit: Callback<ComplaintSubmission>,
    #[prop(into)] is_loading: Signal<bool>,
) -> impl IntoView {
    let complaint = RwSignal::new(String::new());
    let persona_id = RwSignal::new(personas.first().map(|p| p.id.clone()).unwrap_or_default());
    let platform_id = RwSignal::new(platforms.first().map(|p| p.id.clone()).unwrap_or_default());
    let auto_language = RwSignal::new(false);

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = complaint.get();
        if !text.trim().is_empty() {
            on_submit.run(ComplaintSubmission {
                complaint: text,
                persona_id: persona_id.get(),
                platform_id: platform_id.get(),
                auto_language: auto_language.get(),
            });
        }
    };

    view! {
        <form class="analyze-form" on:submit=on_form_submit>
            <textarea
                class="analyze-form__textarea"
                placeholder="Paste the customer complaint here..."
                prop:value=move || complaint.get()
                on:input=move |ev| complaint.set(event_target_value(&ev))
                prop:disabled=move || is_loading.get()
                required
            ></textarea>

            <div class="analyze-form__row">
                <label class="analyze-form__label">
                    "Brand persona"
                    <select
                        class="analyze-form__select"
                        on:change=move |ev| persona_id.set(event_target_value(&ev))
                        prop:disabled=move || is_loading.get()
                    >
                        {personas.iter().map(|p| view! {
                            <option value={p.id.clone()}>{p.label.clone()}</option>
                        }).collect::<Vec<_>>()}
                    </select>
                </label>

                <label class="analyze-form__label">
                    "Target platform"
                    <select
                        class="analyze-form__select"
                        on:change=move |ev| platform_id.set(event_target_value(&ev))
                        prop:disabled=move || is_loading.get()
                    >
                        {platforms.iter().map(|p| view! {
                            <option value={p.id.clone()}>{p.label.clone()}</option>
                        }).collect::<Vec<_>>()}
                    </select>
                </label>
            </div>

            <label class="analyze-form__toggle">
                <input
                    type="checkbox"
                    on:change=move |ev| auto_language.set(event_target_checked(&ev))
                    prop:disabled=move || is_loading.get()
                />
                "Reply in the complaint's language"
            </label>

            <button
                type="submit"
                class="analyze-form__button"
                prop:disabled=move || is_loading.get()
            >
                {move || if is_loading.get() { "Analyzing..." } else { "Run Risk Analysis" }}
            </button>
        </form>
    }
}
