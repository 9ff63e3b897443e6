use serde::Deserialize;

/// A whole journal as authored in the content file. Immutable once loaded.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Journal {
    pub people: People,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
    #[serde(default)]
    pub proposal: Proposal,
    #[serde(default)]
    pub modal: ModalContent,
    #[serde(default)]
    pub labels: Labels,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
pub struct People {
    pub your_name: String,
    pub partner_name: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
pub struct Chapter {
    pub id: u32,
    #[serde(default)]
    pub year: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
pub struct Event {
    pub title: String,
    #[serde(default)]
    pub month: String,
    /// Trusted author text; may carry simple inline markup.
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default)]
    pub loc_name: String,
    #[serde(default)]
    pub loc_img: Option<String>,
    #[serde(default)]
    pub loc_url: Option<String>,
}

impl Event {
    /// Raw description length in characters, markup included.
    pub fn desc_len(&self) -> usize {
        self.desc.chars().count()
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Proposal {
    pub title: String,
    pub body: String,
    pub hero_img: Option<String>,
    pub yes_label: String,
    pub no_label: String,
    pub footer: String,
}

impl Default for Proposal {
    fn default() -> Self {
        Self {
            title: "Satu Pertanyaan".to_string(),
            body: "Setelah melihat semua kenangan kita, aku cuma mau tanya satu hal untuk petualangan berikutnya..."
                .to_string(),
            hero_img: None,
            yes_label: "Yes, I Will!".to_string(),
            no_label: "No, thanks".to_string(),
            footer: "Made with \u{1f499} exclusively for you.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ModalContent {
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub time: String,
    pub desc: String,
    pub img: Option<String>,
    pub map_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Labels {
    pub kicker: String,
    pub heading: String,
    pub heading_accent: String,
    pub start: String,
    pub next: String,
    pub finish: String,
    pub location: String,
    pub read_more: String,
    pub read_less: String,
    pub date: String,
    pub time: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            kicker: "A Digital Journal".to_string(),
            heading: "Our Little".to_string(),
            heading_accent: "Universe".to_string(),
            start: "Chapter 1".to_string(),
            next: "Lanjut".to_string(),
            finish: "Selesai".to_string(),
            location: "Lokasi".to_string(),
            read_more: "Baca Selengkapnya".to_string(),
            read_less: "Tutup Cerita".to_string(),
            date: "Tanggal".to_string(),
            time: "Pukul".to_string(),
        }
    }
}
