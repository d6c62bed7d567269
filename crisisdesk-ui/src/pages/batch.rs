use crate::components::ErrorDisplay;
use super::home::get_catalog;
use leptos::prelude::*;

/// Batch mode posts a plain multipart form; the server runs the rows
/// sequentially and answers with a full results page plus an export link.
#[component]
pub fn BatchPage() -> impl IntoView {
    let catalog = Resource::new(|| (), |_| get_catalog());

    view! {
        <div class="hero">
            <h1 class="hero__title">"Batch Analysis"</h1>
            <p class="hero__subtitle">
                "Upload a CSV or XLSX file of customer messages. Every row is analyzed in sequence and the results come back as a table with an export."
            </p>
        </div>

        <Suspense fallback=move || view! { <p class="catalog-loading">"Loading catalogs..."</p> }>
            {move || {
                catalog.get().map(|result| {
                    match result {
                        Ok(info) => {
                            let warning = (!info.api_key_present).then(|| view! {
                                <div class="warning">
                                    <p class="warning__message">
                                        "No API key configured. Set GEMINI_API_KEY on the server; the batch will not run without it."
                                    </p>
                                </div>
                            });
                            view! {
                                {warning}
                                <form
                                    action="/batch"
                                    method="post"
                                    enctype="multipart/form-data"
                                    class="batch-form"
                                >
                                    <label class="batch-form__label">
                                        "Spreadsheet (CSV or XLSX)"
                                        <input type="file" name="file" accept=".csv,.xlsx,.xls,.ods" required/>
                                    </label>

                                    <label class="batch-form__label">
                                        "Complaint column (blank = first column)"
                                        <input type="text" name="column" placeholder="e.g. message"/>
                                    </label>

                                    <div class="batch-form__row">
                                        <label class="batch-form__label">
                                            "Brand persona"
                                            <select name="persona">
                                                {info.personas.iter().map(|p| view! {
                                                    <option value={p.id.clone()}>{p.label.clone()}</option>
                                                }).collect::<Vec<_>>()}
                                            </select>
                                        </label>

                                        <label class="batch-form__label">
                                            "Target platform"
                                            <select name="platform">
                                                {info.platforms.iter().map(|p| view! {
                                                    <option value={p.id.clone()}>{p.label.clone()}</option>
                                                }).collect::<Vec<_>>()}
                                            </select>
                                        </label>

                                        <label class="batch-form__label">
                                            "Delay between calls (ms)"
                                            <input type="number" name="delay_ms" value="1000" min="0" max="30000"/>
                                        </label>
                                    </div>

                                    <label class="batch-form__toggle">
                                        <input type="checkbox" name="auto_language"/>
                                        "Reply in each message's language"
                                    </label>

                                    <button type="submit" class="batch-form__button">
                                        "Run Batch"
                                    </button>
                                </form>
                            }.into_any()
                        }
                        Err(_) => view! {
                            <ErrorDisplay message="Failed to load the persona and platform catalogs"/>
                        }.into_any(),
                    }
                })
            }}
        </Suspense>

        <p class="page-switch">
            <a href="/">"← Back to single analysis"</a>
        </p>
    }
}
