use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use warta_core::{Category, CompletionModel, NewsBucket, NewsItem};

/// Horizontal rule used between digest sections.
const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Turns verified news into the final digest text, one LLM call per
/// selected item.
pub struct Analyst {
    model: Arc<dyn CompletionModel>,
}

struct Pick<'a> {
    category: Category,
    label: String,
    item: &'a NewsItem,
}

impl Analyst {
    pub fn new(model: Arc<dyn CompletionModel>) -> Self {
        Self { model }
    }

    /// Analyze the top stories and assemble the digest. A failed
    /// analysis degrades to a placeholder section; this never fails.
    pub async fn analyze(&self, bucket: &NewsBucket, date: NaiveDate) -> String {
        let picks = select(bucket);
        let total = picks.len();
        let mut analyses = Vec::with_capacity(total);

        for (i, pick) in picks.iter().enumerate() {
            info!("🧠 Analyzing item {}/{}: {}", i + 1, total, pick.item.title);
            analyses.push(self.analyze_item(pick).await);
        }

        info!("✅ Analysis finished");
        assemble(&analyses, date)
    }

    async fn analyze_item(&self, pick: &Pick<'_>) -> String {
        let prompt = render_prompt(pick.item);

        match self.model.complete(&prompt).await {
            Ok(analysis) => {
                let flag = match pick.category {
                    Category::National => "🇮🇩",
                    Category::International => "🌍",
                };
                format!("{flag} **BERITA {}**\n\n{analysis}", pick.label)
            }
            Err(e) => {
                warn!("❌ Analysis failed for '{}': {}", pick.item.title, e);
                format!("❌ Gagal menganalisis berita: {}", pick.item.title)
            }
        }
    }
}

/// Top of the national list plus the top two international items.
fn select(bucket: &NewsBucket) -> Vec<Pick<'_>> {
    let mut picks = Vec::new();

    if let Some(item) = bucket.national.first() {
        picks.push(Pick {
            category: Category::National,
            label: "NASIONAL".to_string(),
            item,
        });
    }

    for (i, item) in bucket.international.iter().take(2).enumerate() {
        picks.push(Pick {
            category: Category::International,
            label: format!("INTERNASIONAL #{}", i + 1),
            item,
        });
    }

    picks
}

fn render_prompt(item: &NewsItem) -> String {
    format!(
        r#"Kamu adalah analis berita yang sangat cerdas dan reflektif. Analisis berita ini dengan struktur berikut:

BERITA:
Judul: {title}
Sumber: {source}
Ringkasan: {summary}

TUGAS:
Buat analisis dalam format markdown. Gunakan emoji untuk readability.

STRUKTUR (Setiap poin-poin diberikan analisis jelas dan detail agar berita tidak membosankan)

📰 **{title}**
🔗 [{source}]({url})

🧩 **Analisis 5W+1H:**
- **What:** [Apa yang terjadi?]
- **Who:** [Siapa yang terlibat?]
- **When:** [Kapan kejadiannya?]
- **Where:** [Di mana lokasinya?]
- **Why:** [Mengapa hal ini terjadi?]
- **How:** [Bagaimana prosesnya?]

🧠 **Konteks & Teori:**
[Kaitkan dengan teori ekonomi/politik/psikologi yang relevan. Jelaskan dalam 2-3 kalimat.]

💡 **Insight & Refleksi:**
[Apa pembelajaran personal yang bisa diambil? Bagaimana relevansinya dengan kehidupan sehari-hari? 2-3 kalimat.]

⚖️ **Pertimbangan Kritis:**
- **Bias:** [Potensi bias dari sumber?]
- **Dampak:** [Siapa yang diuntungkan/dirugikan?]
- **Perspektif Alternatif:** [Sudut pandang lain yang mungkin?]

PENTING:
- Gunakan bahasa Indonesia yang natural dan engaging
- Total panjang: 250-400 kata
- Fokus pada insight, bukan hanya ringkasan
"#,
        title = item.title,
        source = item.source,
        summary = item.summary,
        url = item.url
    )
}

/// Join section analyses under the dated header and close with the
/// generated-at footer.
fn assemble(analyses: &[String], date: NaiveDate) -> String {
    let header = format!(
        "🗞️ **AI Daily Digest — {}**\n\n{RULE}\n",
        date.format("%A, %d %B %Y")
    );
    let separator = format!("\n\n{RULE}\n\n");
    let footer = format!(
        "\n{RULE}\n\n🤖 *Powered by AI Multi-Agent System | Generated at {} WIB*\n",
        Local::now().format("%H:%M")
    );

    format!("{header}{}{footer}", analyses.join(&separator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use warta_core::Result;

    fn item(title: &str) -> NewsItem {
        NewsItem {
            title: title.to_string(),
            url: format!("https://example.com/{title}"),
            source: "BBC News".to_string(),
            published: "2025-08-22T10:00:00Z".to_string(),
            summary: "Ringkasan singkat.".to_string(),
            credibility_score: Some(8.5),
        }
    }

    fn bucket() -> NewsBucket {
        NewsBucket {
            national: vec![item("nasional-1"), item("nasional-2")],
            international: vec![item("dunia-1"), item("dunia-2"), item("dunia-3")],
        }
    }

    struct FixedModel;

    #[async_trait]
    impl CompletionModel for FixedModel {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn complete(&self, _prompt: &str) -> Result<String> {
            Ok("Analisis lengkap.".to_string())
        }
    }

    /// Fails on the nth call (1-based), succeeds otherwise.
    struct FlakyModel {
        fail_on: usize,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CompletionModel for FlakyModel {
        fn name(&self) -> &str {
            "flaky"
        }

        async fn complete(&self, _prompt: &str) -> Result<String> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if call == self.fail_on {
                Err(warta_core::Error::Inference("boom".to_string()))
            } else {
                Ok("Analisis lengkap.".to_string())
            }
        }
    }

    #[test]
    fn rule_is_forty_characters() {
        assert_eq!(RULE.chars().count(), 40);
        assert!(RULE.chars().all(|c| c == '━'));
    }

    #[test]
    fn selects_one_national_and_two_international() {
        let bucket = bucket();
        let picks = select(&bucket);

        assert_eq!(picks.len(), 3);
        assert_eq!(picks[0].label, "NASIONAL");
        assert_eq!(picks[0].item.title, "nasional-1");
        assert_eq!(picks[1].label, "INTERNASIONAL #1");
        assert_eq!(picks[2].label, "INTERNASIONAL #2");
    }

    #[test]
    fn selection_copes_with_an_empty_national_side() {
        let bucket = NewsBucket {
            national: Vec::new(),
            international: vec![item("dunia-1")],
        };

        let picks = select(&bucket);
        assert_eq!(picks.len(), 1);
        assert_eq!(picks[0].label, "INTERNASIONAL #1");
    }

    #[test]
    fn prompt_embeds_the_item_fields() {
        let news = item("Pemilu 2029");
        let prompt = render_prompt(&news);

        assert!(prompt.contains("Judul: Pemilu 2029"));
        assert!(prompt.contains("Sumber: BBC News"));
        assert!(prompt.contains("Ringkasan: Ringkasan singkat."));
        assert!(prompt.contains("[BBC News](https://example.com/Pemilu 2029)"));
        assert!(prompt.contains("Analisis 5W+1H"));
    }

    #[tokio::test]
    async fn digest_carries_category_prefixes() {
        let analyst = Analyst::new(Arc::new(FixedModel));
        let digest = analyst
            .analyze(&bucket(), NaiveDate::from_ymd_opt(2025, 8, 22).unwrap())
            .await;

        assert!(digest.contains("🇮🇩 **BERITA NASIONAL**"));
        assert!(digest.contains("🌍 **BERITA INTERNASIONAL #1**"));
        assert!(digest.contains("🌍 **BERITA INTERNASIONAL #2**"));
        assert!(digest.starts_with("🗞️ **AI Daily Digest — Friday, 22 August 2025**"));
        assert!(digest.contains("Powered by AI Multi-Agent System"));
        assert!(digest.trim_end().ends_with("WIB*"));
    }

    #[tokio::test]
    async fn failed_analysis_degrades_to_a_placeholder() {
        let model = FlakyModel {
            fail_on: 2,
            calls: AtomicUsize::new(0),
        };
        let analyst = Analyst::new(Arc::new(model));
        let digest = analyst
            .analyze(&bucket(), NaiveDate::from_ymd_opt(2025, 8, 22).unwrap())
            .await;

        // The failing second item is replaced, the other two are intact
        assert!(digest.contains("❌ Gagal menganalisis berita: dunia-1"));
        assert!(digest.contains("🇮🇩 **BERITA NASIONAL**"));
        assert!(digest.contains("🌍 **BERITA INTERNASIONAL #2**"));
    }

    #[test]
    fn assembly_separates_sections_with_rules() {
        let sections = vec!["satu".to_string(), "dua".to_string(), "tiga".to_string()];
        let digest = assemble(&sections, NaiveDate::from_ymd_opt(2025, 8, 22).unwrap());

        // One rule under the header, one per join, one before the footer
        assert_eq!(digest.matches(RULE).count(), 4);
        assert!(digest.contains("satu\n\n━"));
        assert!(digest.contains("\n\ndua"));
    }
}
