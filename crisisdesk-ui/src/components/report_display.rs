use crisisdesk_app::domain::CrisisReport;
use leptos::prelude::*;

fn simple_markdown_to_html(text: &str) -> String {
    let mut result = String::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let processed = line
            .replace("**", "<strong>")
            .replace("__", "<strong>");

        let processed = fix_strong_tags(&processed);

        let processed = processed
            .replace("*", "<em>")
            .replace("_", "<em>");

        let processed = fix_em_tags(&processed);

        if line.starts_with("### ") {
            result.push_str(&format!("<h3>{}</h3>", &processed[4..]));
        } else if line.starts_with("## ") {
            result.push_str(&format!("<h4>{}</h4>", &processed[3..]));
        } else if line.starts_with("# ") {
            result.push_str(&format!("<h3>{}</h3>", &processed[2..]));
        } else if line.starts_with("- ") || line.starts_with("* ") {
            result.push_str(&format!("<li>{}</li>", &processed[2..]));
        } else if let Some(rest) = numbered_item(&processed) {
            result.push_str(&format!("<li>{}</li>", rest));
        } else {
            result.push_str(&format!("<p>{}</p>", processed));
        }
    }

    result
}

fn numbered_item(line: &str) -> Option<&str> {
    let rest = line
        .strip_prefix("1. ")
        .or_else(|| line.strip_prefix("2. "))
        .or_else(|| line.strip_prefix("3. "))?;
    Some(rest)
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

#[component]
pub fn ReportDisplay(report: CrisisReport) -> impl IntoView {
    let html_content = simple_markdown_to_html(&report.report_text);

    view! {
        <div class="report">
            <h2 class="report__title">
                {report.persona_label} " → " {report.platform_label}
            </h2>
            <div class="report__content" inner_html=html_content>
            </div>
            <div class="report__actions">
                <a href="/" class="report__button report__button--primary">
                    "Analyze Another"
                </a>
            </div>
        </div>
    }
}
