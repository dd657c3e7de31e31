use crate::models::CharacterOption;
use serde_json::{json, Value};

/// A fully defaulted product video brief.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoBrief {
    pub product_name: String,
    pub product_category: String,
    pub video_length: String,
    pub tone: String,
    pub style: String,
    pub main_message: String,
    pub target_audience: String,
    pub brand_voice: String,
    pub character: CharacterSource,
    pub vlogging: Option<VoiceOver>,
}

/// Where the main character comes from. A description generated from a
/// photo always wins over the stored mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharacterSource {
    Described(String),
    Mode(CharacterOption),
}

/// Vlogging mode is on; dialogue language for the character, if pinned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceOver {
    Indonesian,
    English,
    Unspecified,
}

impl VoiceOver {
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "id" => VoiceOver::Indonesian,
            "en" => VoiceOver::English,
            _ => VoiceOver::Unspecified,
        }
    }
}

fn character_instruction(source: &CharacterSource) -> String {
    match source {
        CharacterSource::Described(description) => format!(
            "Karakter utama video dideskripsikan sebagai: {description}. \
             Pastikan ini adalah karakter utama."
        ),
        CharacterSource::Mode(CharacterOption::Consistent) => {
            "Pastikan karakter visual dan narasi konsisten dengan karakter yang telah digunakan \
             sebelumnya (jika ada)."
                .to_string()
        }
        CharacterSource::Mode(CharacterOption::New) => {
            "Buat konsep karakter visual dan narasi yang baru dan unik untuk video ini.".to_string()
        }
    }
}

fn vlogging_instruction(voice_over: Option<VoiceOver>) -> String {
    let Some(voice_over) = voice_over else {
        return String::new();
    };

    let mut text = String::from(
        "Video ini harus menampilkan karakter yang berbicara langsung ke kamera atau \
         berinteraksi secara verbal dalam gaya vlogging.\n\
         Sertakan contoh dialog atau monolog singkat untuk karakter.\n\
         Gaya presentasi harus seperti seorang vlogger yang mereview produk.",
    );

    match voice_over {
        VoiceOver::Indonesian => {
            text.push_str("\nDialog/voice over karakter HARUS menggunakan Bahasa Indonesia.")
        }
        VoiceOver::English => {
            text.push_str("\nDialog/voice over karakter HARUS menggunakan Bahasa Inggris.")
        }
        VoiceOver::Unspecified => {}
    }

    text
}

/// The single instruction that asks the model for the full bilingual prompt
/// set as JSON.
pub fn instruction(brief: &VideoBrief) -> String {
    let character = character_instruction(&brief.character);
    let vlogging = vlogging_instruction(brief.vlogging);

    format!(
        r#"Buatkan prompt video review produk yang sangat detail dan profesional untuk produk "{product_name}".
Kategori Produk: "{product_category}". Durasi Video Ideal: "{video_length}".
Nada Video: "{tone}". Gaya Presentasi: "{style}".
Pesan Utama/USP: "{main_message}".
Target Audiens: "{target_audience}".
Gaya Suara Merek (Brand Voice): "{brand_voice}".
{character}
{vlogging}

Prompt ini harus sesuai standar Veo 3 untuk video promosi/review produk yang menarik.
Sertakan elemen-elemen berikut dalam prompt:
1.  **Judul Video Menarik:** Saran judul yang clickbait dan informatif, sesuai target audiens dan pesan utama.
2.  **Pembukaan (Hook):** Cara memulai video yang menarik perhatian dalam 5-10 detik pertama, sangat relevan dengan target audiens.
3.  **Pengenalan Produk:** Deskripsi singkat produk, fitur utama, dan masalah yang dipecahkan, menyoroti pesan utama/USP.
4.  **Fitur Unggulan (Detail):** Jelaskan 3-5 fitur kunci secara mendalam, termasuk manfaatnya bagi pengguna.
    * Contoh penggunaan fitur yang spesifik dan menarik bagi target audiens.
    * Keunggulan dibandingkan kompetitor (jika relevan dan sesuai gaya).
5.  **Pengalaman Pengguna/Demo:** Bagaimana produk digunakan dalam skenario nyata yang relevan dengan target audiens.
6.  **Kelebihan & Kekurangan (Objektif):** Sebutkan secara jujur kelebihan dan (jika ada) kekurangan kecil, disesuaikan dengan nada dan gaya, serta brand voice.
7.  **Kesimpulan & Rekomendasi:** Ringkasan mengapa produk ini layak dan untuk siapa direkomendasikan, dengan menekankan pesan utama/USP.
8.  **Call to Action (CTA):** Ajak penonton untuk 'beli sekarang', 'kunjungi link', 'follow', dll., disesuaikan dengan target audiens dan gaya presentasi.
9.  **Visual & Audio (Saran):** Saran tentang jenis footage (close-up, wide-shot), transisi, musik latar, efek suara, yang mendukung nada, gaya, brand voice, dan menarik bagi target audiens.
10. **Tone & Style:** Nada bicara (informatif, antusias, jujur), gaya presentasi, yang konsisten dengan brand voice.

Tampilkan hasil prompt untuk Bahasa Inggris secara terpisah setelah prompt Bahasa Indonesia, dengan instruksi dan detail yang sama.

Format output JSON dengan properti:
`prompt_id` (prompt video utama Bahasa Indonesia),
`prompt_en` (prompt video utama Bahasa Inggris),
`visual_audio_suggestions_id` (saran visual/audio Bahasa Indonesia),
`visual_audio_suggestions_en` (saran visual/audio Bahasa Inggris)."#,
        product_name = brief.product_name,
        product_category = brief.product_category,
        video_length = brief.video_length,
        tone = brief.tone,
        style = brief.style,
        main_message = brief.main_message,
        target_audience = brief.target_audience,
        brand_voice = brief.brand_voice,
    )
}

/// Response schema for [`instruction`]: four string properties in a fixed order.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "prompt_id": {"type": "STRING", "description": "Detailed video prompt in Indonesian"},
            "prompt_en": {"type": "STRING", "description": "Detailed video prompt in English"},
            "visual_audio_suggestions_id": {"type": "STRING", "description": "Suggestions for visuals and audio in Indonesian"},
            "visual_audio_suggestions_en": {"type": "STRING", "description": "Suggestions for visuals and audio in English"}
        },
        "propertyOrdering": [
            "prompt_id",
            "prompt_en",
            "visual_audio_suggestions_id",
            "visual_audio_suggestions_en"
        ]
    })
}
