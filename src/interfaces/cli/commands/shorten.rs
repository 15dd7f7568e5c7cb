//! Shorten command

use colored::Colorize;
use tracing::debug;

use crate::interfaces::cli::CliError;
use crate::interfaces::form::{FormField, ShortenEntry};
use crate::services::{LinkStats, ShortenerService};

/// 按位置把 `--code` 与 URL 配对；多余的 code 被忽略
pub fn build_entries(
    urls: Vec<String>,
    validity: Option<i64>,
    codes: Vec<String>,
) -> Vec<ShortenEntry> {
    let mut codes = codes.into_iter();
    urls.into_iter()
        .map(|url| ShortenEntry {
            url,
            validity,
            shortcode: codes.next(),
        })
        .collect()
}

pub async fn shorten_urls(
    service: &ShortenerService,
    urls: Vec<String>,
    validity: Option<i64>,
    codes: Vec<String>,
) -> Result<Vec<LinkStats>, CliError> {
    if codes.len() > urls.len() {
        debug!(
            "Ignoring {} extra --code values",
            codes.len() - urls.len()
        );
    }

    let form = service.form_from_entries(build_entries(urls, validity, codes))?;
    let records = service.submit_form(&form)?;
    let stats = service.to_stats(&records);

    print_stats(&stats);
    Ok(stats)
}

pub fn print_stats(stats: &[LinkStats]) {
    if stats.is_empty() {
        println!("{} No short links created", "ℹ".bold().blue());
        return;
    }

    println!("{}", "Shortened URLs:".bold().green());
    println!();
    for link in stats {
        println!(
            "  {} -> {}",
            link.short_url.cyan(),
            link.url.blue().underline()
        );
        println!(
            "    {} {}  {} {}",
            format!("{}:", FormField::Validity.display_title()).dimmed(),
            link.validity_minutes,
            "expires:".dimmed(),
            link.expires_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string()
                .yellow()
        );
        println!(
            "    {} {}",
            "clicks:".dimmed(),
            link.click_count.to_string().cyan()
        );
    }
    println!();
    println!(
        "{} Total {} short links",
        "ℹ".bold().blue(),
        stats.len().to_string().green()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{ShortenerSettings, TelemetryReporter};

    #[test]
    fn test_codes_paired_by_position() {
        let entries = build_entries(
            vec!["https://a.com".into(), "https://b.com".into()],
            Some(5),
            vec!["abc".into()],
        );
        assert_eq!(entries[0].shortcode.as_deref(), Some("abc"));
        assert_eq!(entries[1].shortcode, None);
        assert!(entries.iter().all(|e| e.validity == Some(5)));
    }

    #[tokio::test]
    async fn test_shorten_urls_rejects_invalid_batch() {
        let service =
            ShortenerService::new(ShortenerSettings::default(), TelemetryReporter::disabled());
        let result = shorten_urls(&service, vec!["not-a-url".into()], None, Vec::new()).await;
        assert!(matches!(result, Err(CliError::ValidationError(_))));
        assert!(service.is_empty());
    }

    #[tokio::test]
    async fn test_shorten_urls_creates_links() {
        let service =
            ShortenerService::new(ShortenerSettings::default(), TelemetryReporter::disabled());
        let stats = shorten_urls(
            &service,
            vec!["https://example.com".into()],
            None,
            vec!["promo1".into()],
        )
        .await
        .unwrap();
        assert_eq!(stats[0].short_url, "http://localhost:3000/promo1");
        assert_eq!(stats[0].validity_minutes, 30);
    }
}
