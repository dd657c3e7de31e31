//! Canned prompts for links to existing videos. No model is involved: the
//! platform is guessed from the URL and a fixed template is filled in.

/// Separator between the Indonesian and English prompt in the combined field.
pub const LANGUAGE_SEPARATOR: &str = "\n\n---\n\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoPlatform {
    YouTube,
    TikTok,
    Other,
}

impl VideoPlatform {
    /// Classify by substring; covers web, mobile (`m.`) and short-link hosts.
    pub fn detect(url: &str) -> Self {
        let url = url.to_lowercase();
        if url.contains("youtube.com") || url.contains("youtu.be") {
            VideoPlatform::YouTube
        } else if url.contains("tiktok.com") {
            VideoPlatform::TikTok
        } else {
            VideoPlatform::Other
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedPrompt {
    pub prompt_id: String,
    pub prompt_en: String,
    pub visual_audio_id: String,
    pub visual_audio_en: String,
}

impl SimulatedPrompt {
    /// Indonesian and English prompts joined by [`LANGUAGE_SEPARATOR`].
    pub fn combined_prompt(&self) -> String {
        format!("{}{}{}", self.prompt_id, LANGUAGE_SEPARATOR, self.prompt_en)
    }
}

pub fn simulate(video_url: &str) -> SimulatedPrompt {
    match VideoPlatform::detect(video_url) {
        VideoPlatform::YouTube => youtube(video_url),
        VideoPlatform::TikTok => tiktok(video_url),
        VideoPlatform::Other => generic(video_url),
    }
}

fn youtube(url: &str) -> SimulatedPrompt {
    SimulatedPrompt {
        prompt_id: format!(
            "(Prompt Simulasi dari YouTube: {url})\n\
             **Judul:** \"Review Mendalam: Laptop Gaming Terbaru yang Mengguncang Pasar!\"\n\
             **Pembukaan:** Adegan dramatis performa gaming, \"Apakah ini laptop impian para gamer?\"\n\
             **Fitur Utama:** Performa CPU/GPU, kualitas layar, sistem pendingin.\n\
             **Demo:** Uji benchmark, gameplay berat, pengeditan video.\n\
             **Kesimpulan:** Laptop ini adalah monster performa untuk gamer serius dan kreator konten.\n\
             **CTA:** \"Jangan lewatkan! Link pembelian di deskripsi video!\""
        ),
        prompt_en: format!(
            "(Simulated Prompt from YouTube: {url})\n\
             **Title:** \"In-depth Review: The New Gaming Laptop Shaking Up the Market!\"\n\
             **Opening:** Dramatic gaming performance scene, \"Is this the ultimate gamer's dream laptop?\"\n\
             **Key Features:** CPU/GPU performance, screen quality, cooling system.\n\
             **Demo:** Benchmark tests, heavy gameplay, video editing.\n\
             **Conclusion:** This laptop is a performance beast for serious gamers and content creators.\n\
             **CTA:** \"Don't miss out! Purchase link in video description!\""
        ),
        visual_audio_id: "**Saran Visual & Audio:**\n\
             -   Visual: Scene intro 3D logo gaming, footage close-up keyboard RGB, grafis spek overlay.\n\
             -   Audio: Musik latar epik, efek suara keyboard mekanik, suara kipas laptop (rendah)."
            .to_string(),
        visual_audio_en: "**Visual & Audio Suggestions:**\n\
             -   Visual: 3D gaming logo intro scene, RGB keyboard close-up footage, spec overlay graphics.\n\
             -   Audio: Epic background music, mechanical keyboard sound effects, low laptop fan sound."
            .to_string(),
    }
}

fn tiktok(url: &str) -> SimulatedPrompt {
    SimulatedPrompt {
        prompt_id: format!(
            "(Prompt Simulasi dari TikTok: {url})\n\
             **Judul:** \"Wajib Punya! Smartwatch Estetik & Fitur Lengkap #smartwatch #fashiontech\"\n\
             **Pembukaan:** Transisi cepat gaya hidup aktif dengan smartwatch.\n\
             **Fitur Cepat:** Pelacakan kesehatan, notifikasi, desain.\n\
             **Sound:** Musik trendi, efek suara transisi.\n\
             **CTA:** \"Cek keranjang kuning sekarang!\""
        ),
        prompt_en: format!(
            "(Simulated Prompt from TikTok: {url})\n\
             **Title:** \"Must-Have! Aesthetic & Feature-Packed Smartwatch #smartwatch #fashiontech\"\n\
             **Opening:** Fast-paced active lifestyle transitions with the smartwatch.\n\
             **Quick Features:** Health tracking, notifications, design.\n\
             **Sound:** Trendy music, transition sound effects.\n\
             **CTA:** \"Check the yellow basket now!\""
        ),
        visual_audio_id: "**Saran Visual & Audio:**\n\
             -   Visual: Transisi cepat dengan efek 'glitch', tampilan UI smartwatch, orang berolahraga dengan smartwatch.\n\
             -   Audio: Musik pop ceria, efek 'swoosh' untuk transisi."
            .to_string(),
        visual_audio_en: "**Visual & Audio Suggestions:**\n\
             -   Visual: Fast transitions with 'glitch' effects, smartwatch UI display, people exercising with the smartwatch.\n\
             -   Audio: Upbeat pop music, 'swoosh' effects for transitions."
            .to_string(),
    }
}

fn generic(url: &str) -> SimulatedPrompt {
    SimulatedPrompt {
        prompt_id: format!(
            "(Prompt Simulasi Umum dari Link: {url})\n\
             **Judul:** \"Review Produk Keren: {url} Ini Bakal Ubah Hidupmu!\"\n\
             **Pembukaan:** Tunjukkan masalah umum, lalu perkenalkan produk sebagai solusi.\n\
             **Manfaat:** Sebutkan 3 manfaat utama.\n\
             **Visual:** Dekat, bersih, fokus pada produk.\n\
             **CTA:** \"Pelajari lebih lanjut di sini!\""
        ),
        prompt_en: format!(
            "(Generic Simulated Prompt from Link: {url})\n\
             **Title:** \"Awesome Product Review: {url} Will Change Your Life!\"\n\
             **Opening:** Show a common problem, then introduce the product as a solution.\n\
             **Benefits:** Mention 3 key benefits.\n\
             **Visuals:** Close-ups, clean, focus on the product.\n\
             **CTA:** \"Learn more here!\""
        ),
        visual_audio_id: "**Saran Visual & Audio:**\n\
             -   Visual: Pencahayaan alami, latar belakang minimalis, grafis teks sederhana.\n\
             -   Audio: Musik latar tenang, suara narasi jelas."
            .to_string(),
        visual_audio_en: "**Visual & Audio Suggestions:**\n\
             -   Visual: Natural lighting, minimalist background, simple text graphics.\n\
             -   Audio: Calm background music, clear narration voice."
            .to_string(),
    }
}
