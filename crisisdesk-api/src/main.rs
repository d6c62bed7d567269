use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, Query},
    http::header,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use crisisdesk_app::application::BatchRequest;
use crisisdesk_app::domain::{BatchReport, CrisisReport};
use crisisdesk_app::infrastructure::batch::export;
use crisisdesk_app::AppContext;
use crisisdesk_errors::AppError;
use crisisdesk_ui::pages::{AnalyzeComplaintFn, GetCatalogFn};
use crisisdesk_ui::App;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, handle_server_fns_with_context, LeptosRoutes};
use serde::Deserialize;
use tower_http::compression::CompressionLayer;
use uuid::Uuid;

const MAX_UPLOAD_BYTES: usize = 8 * 1024 * 1024;
const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

#[derive(Deserialize)]
struct AnalyzeForm {
    complaint: String,
    persona: String,
    platform: String,
    auto_language: Option<String>,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let conf = get_configuration(Some("Cargo.toml")).expect("Failed to load Leptos config");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let app_context = AppContext::from_env();

    let routes = generate_route_list(App);

    server_fn::axum::register_explicit::<AnalyzeComplaintFn>();
    server_fn::axum::register_explicit::<GetCatalogFn>();
    tracing::info!("Registered server functions: AnalyzeComplaintFn, GetCatalogFn");

    let app = Router::new()
        .route("/analyze", get({
            let ctx = app_context.clone();
            move |query: Query<AnalyzeForm>| {
                let ctx = ctx.clone();
                async move {
                    handle_analyze_form(ctx, query.0).await
                }
            }
        }).post({
            let ctx = app_context.clone();
            move |form: Form<AnalyzeForm>| {
                let ctx = ctx.clone();
                async move {
                    handle_analyze_form(ctx, form.0).await
                }
            }
        }))
        .route("/batch", post({
            let ctx = app_context.clone();
            move |multipart: Multipart| {
                let ctx = ctx.clone();
                async move {
                    handle_batch_upload(ctx, multipart).await
                }
            }
        }))
        .route("/export/{id}", get({
            let ctx = app_context.clone();
            move |id: Path<Uuid>| {
                let ctx = ctx.clone();
                async move {
                    handle_export(ctx, id.0).await
                }
            }
        }))
        .route("/api/{*fn_name}", post({
            let ctx = app_context.clone();
            move |req| {
                let ctx = ctx.clone();
                async move {
                    handle_server_fns_with_context(
                        move || provide_context(ctx.clone()),
                        req
                    ).await
                }
            }
        }))
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let ctx = app_context.clone();
                move || provide_context(ctx.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CompressionLayer::new())
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(leptos_options);

    tracing::info!("Listening on http://{}", addr);
    tracing::info!(
        "Daily analysis budget remaining: {}",
        app_context.cost_tracker.remaining()
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

async fn handle_analyze_form(ctx: AppContext, form: AnalyzeForm) -> impl IntoResponse {
    use std::net::{IpAddr, Ipv4Addr};

    let client_ip = IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1));

    if let Err(e) = ctx.rate_limiter.check(client_ip) {
        return Html(render_error_page(&e.user_message()));
    }

    if let Err(e) = ctx.cost_tracker.check_and_increment() {
        return Html(render_error_page(e.user_message()));
    }

    let auto_language = form.auto_language.is_some();

    match ctx
        .analyze_complaint
        .execute(form.complaint, &form.persona, &form.platform, auto_language)
        .await
    {
        Ok(report) => Html(render_report_page(&report)),
        Err(e) => Html(render_error_page(e.user_message())),
    }
}

async fn handle_batch_upload(ctx: AppContext, mut multipart: Multipart) -> Response {
    use std::net::{IpAddr, Ipv4Addr};

    let client_ip = IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1));

    if let Err(e) = ctx.rate_limiter.check(client_ip) {
        return Html(render_error_page(&e.user_message())).into_response();
    }

    let request = match read_batch_form(&mut multipart).await {
        Ok(request) => request,
        Err(e) => return Html(render_error_page(e.user_message())).into_response(),
    };

    match ctx.run_batch.execute(request).await {
        Ok(report) => {
            let id = ctx.store_report(report.clone());
            tracing::info!(
                "Batch {} finished: {} rows, {} errors",
                id,
                report.stats.total_rows,
                report.stats.error_rows
            );
            Html(render_batch_page(&report)).into_response()
        }
        Err(e) => Html(render_error_page(e.user_message())).into_response(),
    }
}

async fn read_batch_form(multipart: &mut Multipart) -> Result<BatchRequest, AppError> {
    let mut filename = String::new();
    let mut bytes: Vec<u8> = Vec::new();
    let mut column = None;
    let mut persona_id = String::new();
    let mut platform_id = String::new();
    let mut delay_ms = 1000u64;
    let mut auto_language = false;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::SpreadsheetError(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                filename = field.file_name().unwrap_or("upload").to_string();
                bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::SpreadsheetError(e.to_string()))?
                    .to_vec();
            }
            "column" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::SpreadsheetError(e.to_string()))?;
                let value = value.trim();
                if !value.is_empty() {
                    column = Some(value.to_string());
                }
            }
            "persona" => {
                persona_id = field
                    .text()
                    .await
                    .map_err(|e| AppError::SpreadsheetError(e.to_string()))?;
            }
            "platform" => {
                platform_id = field
                    .text()
                    .await
                    .map_err(|e| AppError::SpreadsheetError(e.to_string()))?;
            }
            "delay_ms" => {
                delay_ms = field
                    .text()
                    .await
                    .map_err(|e| AppError::SpreadsheetError(e.to_string()))?
                    .trim()
                    .parse()
                    .unwrap_or(1000);
            }
            "auto_language" => {
                auto_language = true;
            }
            _ => {}
        }
    }

    if bytes.is_empty() {
        return Err(AppError::SpreadsheetError("no file uploaded".to_string()));
    }

    Ok(BatchRequest {
        filename,
        bytes,
        column,
        persona_id,
        platform_id,
        delay_ms,
        auto_language,
    })
}

async fn handle_export(ctx: AppContext, id: Uuid) -> Response {
    let Some(report) = ctx.report(&id) else {
        return Html(render_error_page(AppError::ReportNotFound.user_message())).into_response();
    };

    match export::build_workbook(&report) {
        Ok(bytes) => (
            [
                (header::CONTENT_TYPE, XLSX_MIME.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"crisisdesk-batch-{id}.xlsx\""),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => Html(render_error_page(e.user_message())).into_response(),
    }
}

fn render_report_page(report: &CrisisReport) -> String {
    let html_content = simple_markdown_to_html(&report.report_text);
    let title = html_escape(&report.persona_label);
    let platform = html_escape(&report.platform_label);
    format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>CrisisDesk Report</title>
    <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🛡️</text></svg>">
    <style>{CSS}</style>
</head>
<body>
    <main class="container">
        <div class="report">
            <h2 class="report__title">{title} → {platform}</h2>
            <div class="report__content">{html_content}</div>
            <div class="report__actions">
                <a href="/" class="report__button--primary" style="text-decoration:none;display:inline-block;">Analyze Another</a>
            </div>
        </div>
    </main>
</body>
</html>"#, title = title, platform = platform, html_content = html_content, CSS = CSS)
}

fn render_batch_page(report: &BatchReport) -> String {
    let stats = &report.stats;
    let average = stats
        .average_anger_score
        .map(|avg| format!("{avg:.1}"))
        .unwrap_or_else(|| "—".to_string());

    let risk_rows: String = stats
        .risk_level_counts
        .iter()
        .map(|(level, count)| {
            format!(
                "<tr><td>{}</td><td>{}</td></tr>",
                html_escape(level),
                count
            )
        })
        .collect();

    let category_rows: String = stats
        .category_counts
        .iter()
        .map(|(category, count)| {
            format!(
                "<tr><td>{}</td><td>{}</td></tr>",
                html_escape(category),
                count
            )
        })
        .collect();

    let top_words: String = report
        .word_frequency
        .iter()
        .take(20)
        .map(|(word, count)| format!("<span class=\"word-chip\">{} ({})</span>", html_escape(word), count))
        .collect::<Vec<_>>()
        .join(" ");

    let analysis_rows: String = report
        .rows
        .iter()
        .map(|row| {
            let row_class = if row.error { " class=\"row--error\"" } else { "" };
            let anger = row
                .anger_score
                .map(|s| s.to_string())
                .unwrap_or_else(|| "—".to_string());
            format!(
                "<tr{}><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                row_class,
                row.row_index,
                html_escape(&row.message),
                anger,
                html_escape(&row.risk_level),
                html_escape(&row.category),
                html_escape(&row.suggested_reply),
            )
        })
        .collect();

    format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>CrisisDesk Batch Report</title>
    <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🛡️</text></svg>">
    <style>{CSS}</style>
</head>
<body>
    <main class="container container--wide">
        <div class="batch-report">
            <h2 class="batch-report__title">Batch Report: {persona} → {platform}</h2>

            <div class="stat-grid">
                <div class="stat"><span class="stat__value">{total}</span><span class="stat__label">rows analyzed</span></div>
                <div class="stat"><span class="stat__value">{errors}</span><span class="stat__label">error rows</span></div>
                <div class="stat"><span class="stat__value">{skipped}</span><span class="stat__label">empty cells skipped</span></div>
                <div class="stat"><span class="stat__value">{average}</span><span class="stat__label">average anger score</span></div>
            </div>

            <div class="batch-report__actions">
                <a href="/export/{id}" class="report__button--primary" style="text-decoration:none;display:inline-block;">Download XLSX</a>
                <a href="/batch" class="report__button--secondary" style="text-decoration:none;display:inline-block;">Run Another Batch</a>
            </div>

            <div class="count-tables">
                <div class="count-table">
                    <h3>Risk levels</h3>
                    <table><thead><tr><th>Level</th><th>Count</th></tr></thead><tbody>{risk_rows}</tbody></table>
                </div>
                <div class="count-table">
                    <h3>Categories</h3>
                    <table><thead><tr><th>Category</th><th>Count</th></tr></thead><tbody>{category_rows}</tbody></table>
                </div>
            </div>

            <h3>Frequent words</h3>
            <p class="word-cloud">{top_words}</p>

            <h3>Analyses</h3>
            <table class="analyses-table">
                <thead><tr><th>Row</th><th>Message</th><th>Anger</th><th>Risk</th><th>Category</th><th>Suggested reply</th></tr></thead>
                <tbody>{analysis_rows}</tbody>
            </table>
        </div>
    </main>
</body>
</html>"#,
        persona = html_escape(&report.persona_label),
        platform = html_escape(&report.platform_label),
        total = stats.total_rows,
        errors = stats.error_rows,
        skipped = report.skipped_rows,
        average = average,
        id = report.id,
        risk_rows = risk_rows,
        category_rows = category_rows,
        top_words = top_words,
        analysis_rows = analysis_rows,
        CSS = CSS,
    )
}

fn render_error_page(message: &str) -> String {
    format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Error - CrisisDesk</title>
    <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🛡️</text></svg>">
    <style>{CSS}</style>
</head>
<body>
    <main class="container">
        <div class="error">
            <p class="error__title">Something went wrong</p>
            <p class="error__message">{message}</p>
            <a href="/" class="error__retry" style="text-decoration:none;display:inline-block;margin-top:1rem;">Back to Start</a>
        </div>
    </main>
</body>
</html>"#, message = html_escape(message), CSS = CSS)
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn simple_markdown_to_html(text: &str) -> String {
    let mut result = String::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let processed = line.replace("**", "<strong>").replace("__", "<strong>");
        let processed = fix_strong_tags(&processed);
        let processed = processed.replace("*", "<em>").replace("_", "<em>");
        let processed = fix_em_tags(&processed);

        if line.starts_with("### ") {
            result.push_str(&format!("<h3>{}</h3>", &processed[4..]));
        } else if line.starts_with("## ") {
            result.push_str(&format!("<h4>{}</h4>", &processed[3..]));
        } else if line.starts_with("# ") {
            result.push_str(&format!("<h3>{}</h3>", &processed[2..]));
        } else if line.starts_with("- ") || line.starts_with("* ") {
            result.push_str(&format!("<li>{}</li>", &processed[2..]));
        } else {
            result.push_str(&format!("<p>{}</p>", processed));
        }
    }
    result
}

fn fix_strong_tags(text: &str) -> String {
    let count = text.matches("<strong>").count();
    let mut result = text.to_string();
    for i in 0..count {
        if i % 2 == 1 {
            result = result.replacen("<strong>", "</strong>", 1);
        }
    }
    result
}

fn fix_em_tags(text: &str) -> String {
    let count = text.matches("<em>").count();
    let mut result = text.to_string();
    for i in 0..count {
        if i % 2 == 1 {
            result = result.replacen("<em>", "</em>", 1);
        }
    }
    result
}

const CSS: &str = r#"
:root {
    --base: #faf4ed;
    --surface: #fffaf3;
    --overlay: #f2e9e1;
    --muted: #9893a5;
    --subtle: #797593;
    --text: #575279;
    --love: #b4637a;
    --gold: #ea9d34;
    --pine: #286983;
    --foam: #56949f;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
    font-family: 'Inter', -apple-system, sans-serif;
    background: var(--base);
    color: var(--text);
    min-height: 100vh;
}
.container { max-width: 800px; margin: 0 auto; padding: 1.5rem; }
.container--wide { max-width: 1100px; }
.report, .batch-report {
    background: var(--surface); border: 2px solid var(--overlay);
    border-radius: 12px; padding: 1.5rem; margin: 2rem 0;
}
.report__title, .batch-report__title { color: var(--pine); font-size: 1.4rem; margin-bottom: 1rem; padding-bottom: 0.75rem; border-bottom: 2px solid var(--overlay); }
.report__content { line-height: 1.8; font-size: 1.05rem; }
.report__content p { margin-bottom: 1rem; }
.report__content strong { font-weight: 700; color: var(--love); }
.report__content em { font-style: italic; }
.report__content h3 { font-size: 1.2rem; color: var(--pine); margin: 1rem 0 0.5rem; }
.report__content h4 { font-size: 1.1rem; color: var(--subtle); margin: 0.75rem 0 0.5rem; }
.report__content li { margin-left: 1.5rem; margin-bottom: 0.5rem; list-style: disc; }
.report__actions, .batch-report__actions { margin-top: 1.5rem; padding-top: 1rem; border-top: 2px solid var(--overlay); display: flex; gap: 0.75rem; }
.report__button--primary { padding: 0.75rem 1.5rem; background: var(--pine); color: var(--base); border: none; border-radius: 8px; font-weight: 600; cursor: pointer; }
.report__button--secondary { padding: 0.75rem 1.5rem; background: var(--foam); color: var(--base); border: none; border-radius: 8px; font-weight: 600; cursor: pointer; }
.stat-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(140px, 1fr)); gap: 1rem; margin: 1rem 0; }
.stat { background: var(--overlay); border-radius: 8px; padding: 1rem; text-align: center; }
.stat__value { display: block; font-size: 1.6rem; font-weight: 700; color: var(--pine); }
.stat__label { color: var(--subtle); font-size: 0.85rem; }
.count-tables { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 1.5rem; margin: 1.5rem 0; }
.count-table h3, .batch-report h3 { color: var(--subtle); margin: 1rem 0 0.5rem; }
table { width: 100%; border-collapse: collapse; font-size: 0.95rem; }
th { text-align: left; color: var(--subtle); border-bottom: 2px solid var(--overlay); padding: 0.4rem 0.6rem; }
td { border-bottom: 1px solid var(--overlay); padding: 0.4rem 0.6rem; vertical-align: top; }
.row--error td { color: var(--love); }
.word-cloud { line-height: 2.2; }
.word-chip { background: var(--overlay); border-radius: 999px; padding: 0.25rem 0.75rem; margin-right: 0.25rem; white-space: nowrap; }
.error { background: #fce8ec; border: 2px solid var(--love); border-radius: 8px; padding: 1.25rem; margin: 2rem 0; }
.error__title { color: var(--love); font-weight: 700; margin-bottom: 0.5rem; }
.error__message { color: #8b3d4d; }
.error__retry { padding: 0.5rem 1rem; background: var(--love); color: var(--base); border: none; border-radius: 4px; cursor: pointer; }
"#;

fn shell(_options: LeptosOptions) -> impl IntoView {
    use leptos::prelude::*;
    use leptos_meta::*;

    let css = r#"
        :root {
            --base: #faf4ed;
            --surface: #fffaf3;
            --overlay: #f2e9e1;
            --muted: #9893a5;
            --subtle: #797593;
            --text: #575279;
            --love: #b4637a;
            --gold: #ea9d34;
            --pine: #286983;
            --foam: #56949f;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: 'Inter', -apple-system, sans-serif;
            background: var(--base);
            color: var(--text);
            min-height: 100vh;
        }
        .container { max-width: 800px; margin: 0 auto; padding: 1.5rem; }
        .hero { text-align: center; padding: 3rem 0 2rem; }
        .hero__title { font-size: clamp(2rem, 5vw, 3rem); color: var(--pine); font-weight: 800; margin-bottom: 0.75rem; }
        .hero__subtitle { color: var(--subtle); font-size: 1.1rem; max-width: 560px; margin: 0 auto; }
        .warning { background: #fdf3e3; border: 2px solid var(--gold); border-radius: 8px; padding: 1rem 1.25rem; margin: 1.5rem 0; }
        .warning__message { color: #8a6116; }
        .analyze-form, .batch-form { display: flex; flex-direction: column; gap: 1rem; margin: 2rem 0; }
        .analyze-form__textarea {
            min-height: 160px; padding: 1rem 1.25rem; border: 2px solid var(--overlay);
            border-radius: 8px; background: var(--surface); color: var(--text); font-size: 1rem; resize: vertical;
        }
        .analyze-form__textarea:focus { outline: none; border-color: var(--pine); }
        .analyze-form__row, .batch-form__row { display: flex; flex-direction: column; gap: 1rem; }
        @media (min-width: 640px) { .analyze-form__row, .batch-form__row { flex-direction: row; } }
        .analyze-form__label, .batch-form__label { display: flex; flex-direction: column; gap: 0.35rem; flex: 1; color: var(--subtle); font-size: 0.9rem; }
        .analyze-form__select, .batch-form select, .batch-form input {
            padding: 0.65rem 0.9rem; border: 2px solid var(--overlay); border-radius: 8px;
            background: var(--surface); color: var(--text); font-size: 1rem;
        }
        .analyze-form__toggle, .batch-form__toggle { display: flex; align-items: center; gap: 0.5rem; color: var(--subtle); }
        .analyze-form__button, .batch-form__button {
            padding: 1rem 2rem; background: var(--pine); color: var(--base);
            border: none; border-radius: 8px; font-size: 1rem; font-weight: 600; cursor: pointer;
        }
        .analyze-form__button:hover, .batch-form__button:hover { opacity: 0.9; }
        .analyze-form__button:disabled, .batch-form__button:disabled { background: var(--muted); cursor: not-allowed; }
        .loading { display: flex; flex-direction: column; align-items: center; padding: 3rem; }
        .loading__spinner {
            width: 50px; height: 50px; border: 4px solid var(--overlay);
            border-top-color: var(--gold); border-radius: 50%; animation: spin 1s linear infinite;
        }
        @keyframes spin { to { transform: rotate(360deg); } }
        .loading__text { margin-top: 1rem; color: var(--subtle); font-style: italic; }
        .report {
            background: var(--surface); border: 2px solid var(--overlay);
            border-radius: 12px; padding: 1.5rem; margin: 2rem 0;
        }
        .report__title { color: var(--pine); font-size: 1.4rem; margin-bottom: 1rem; padding-bottom: 0.75rem; border-bottom: 2px solid var(--overlay); }
        .report__content { line-height: 1.8; font-size: 1.05rem; }
        .report__content p { margin-bottom: 1rem; }
        .report__content strong { font-weight: 700; color: var(--love); }
        .report__content em { font-style: italic; }
        .report__content h3 { font-size: 1.2rem; color: var(--pine); margin: 1rem 0 0.5rem; }
        .report__content h4 { font-size: 1.1rem; color: var(--subtle); margin: 0.75rem 0 0.5rem; }
        .report__content li { margin-left: 1.5rem; margin-bottom: 0.5rem; list-style: disc; }
        .report__actions { margin-top: 1.5rem; padding-top: 1rem; border-top: 2px solid var(--overlay); }
        .report__button--primary { padding: 0.75rem 1.5rem; background: var(--pine); color: var(--base); border: none; border-radius: 8px; font-weight: 600; cursor: pointer; }
        .error { background: #fce8ec; border: 2px solid var(--love); border-radius: 8px; padding: 1.25rem; margin: 2rem 0; }
        .error__title { color: var(--love); font-weight: 700; margin-bottom: 0.5rem; }
        .error__message { color: #8b3d4d; }
        .error__retry { margin-top: 1rem; padding: 0.5rem 1rem; background: var(--love); color: var(--base); border: none; border-radius: 4px; cursor: pointer; }
        .page-switch { text-align: center; padding: 1.5rem 0; }
        .page-switch a { color: var(--foam); font-weight: 600; text-decoration: none; }
        .catalog-loading { text-align: center; color: var(--muted); padding: 2rem 0; }
        .footer { text-align: center; padding: 2rem 0; color: var(--muted); font-size: 0.9rem; border-top: 1px solid var(--overlay); margin-top: 3rem; }
    "#;

    let submit_script = r#"
        document.addEventListener('DOMContentLoaded', function() {
            document.querySelectorAll('form.batch-form').forEach(function(form) {
                var button = form.querySelector('button[type=submit]');
                form.addEventListener('submit', function() {
                    if (button) {
                        button.disabled = true;
                        button.textContent = 'Running batch, keep this tab open...';
                        button.style.cursor = 'wait';
                    }
                });
            });
        });
    "#;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>"CrisisDesk | Social Media Crisis Analyst"</title>
                <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🛡️</text></svg>"/>
                <style>{css}</style>
                <MetaTags/>
            </head>
            <body>
                <App/>
                <script>{submit_script}</script>
            </body>
        </html>
    }
}
