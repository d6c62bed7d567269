use crate::components::{ComplaintForm, ComplaintSubmission, ErrorDisplay, LoadingSpinner, ReportDisplay};
use crisisdesk_app::domain::{CatalogInfo, CrisisReport};
use leptos::prelude::*;
use server_fn::ServerFnError;

#[server(GetCatalogFn, "/api", endpoint = "catalog")]
pub async fn get_catalog() -> Result<CatalogInfo, ServerFnError> {
    use crisisdesk_app::AppContext;

    let ctx = expect_context::<AppContext>();

    Ok(CatalogInfo {
        personas: ctx.catalog.personas().to_vec(),
        platforms: ctx.catalog.platforms().to_vec(),
        api_key_present: ctx.api_key_present(),
    })
}

#[server(AnalyzeComplaintFn, "/api", endpoint = "analyze")]
pub async fn analyze_complaint(
    complaint: String,
    persona: String,
    platform: String,
    auto_language: Option<bool>,
) -> Result<CrisisReport, ServerFnError> {
    use crisisdesk_app::AppContext;
    use std::net::{IpAddr, Ipv4Addr};

    let ctx = expect_context::<AppContext>();

    let client_ip = IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1));

    if let Err(e) = ctx.rate_limiter.check(client_ip) {
        return Err(ServerFnError::new(e.user_message()));
    }

    if let Err(e) = ctx.cost_tracker.check_and_increment() {
        return Err(ServerFnError::new(e.user_message()));
    }

    tracing::info!("Analyzing complaint: persona={}, platform={}", persona, platform);

    ctx.analyze_complaint
        .execute(complaint, &persona, &platform, auto_language.unwrap_or(false))
        .await
        .map_err(|e| ServerFnError::new(e.user_message()))
}

#[component]
pub fn HomePage() -> impl IntoView {
    let catalog = Resource::new(|| (), |_| get_catalog());
    let analyze = ServerAction::<AnalyzeComplaintFn>::new();
    let pending = analyze.pending();
    let outcome = analyze.value();

    view! {
        <div class="hero">
            <h1 class="hero__title">"CrisisDesk"</h1>
            <p class="hero__subtitle">
                "Paste a customer complaint, pick your brand persona and target platform, and get a risk score, an action plan, and an on-brand reply draft."
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
                                        "No API key configured. Set GEMINI_API_KEY on the server; analyses will not run without it."
                                    </p>
                                </div>
                            });
                            view! {
                                {warning}
                                <ComplaintForm
                                    personas=info.personas
                                    platforms=info.platforms
                                    is_loading=pending
                                    on_submit=move |s: ComplaintSubmission| {
                                        analyze.dispatch(AnalyzeComplaintFn {
                                            complaint: s.complaint,
                                            persona: s.persona_id,
                                            platform: s.platform_id,
                                            auto_language: Some(s.auto_language),
                                        });
                                    }
                                />
                            }.into_any()
                        }
                        Err(_) => view! {
                            <ErrorDisplay message="Failed to load the persona and platform catalogs"/>
                        }.into_any(),
                    }
                })
            }}
        </Suspense>

        {move || pending.get().then(|| view! { <LoadingSpinner/> })}

        {move || {
            outcome.get().map(|result| {
                match result {
                    Ok(report) => view! { <ReportDisplay report=report/> }.into_any(),
                    Err(e) => view! { <ErrorDisplay message=server_error_message(&e)/> }.into_any(),
                }
            })
        }}

        <p class="page-switch">
            <a href="/batch">"Batch mode: analyze a whole spreadsheet →"</a>
        </p>
    }
}

fn server_error_message(error: &ServerFnError) -> String {
    match error {
        ServerFnError::ServerError(message) => message.clone(),
        other => other.to_string(),
    }
}
