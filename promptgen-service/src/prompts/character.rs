use super::PromptPair;

/// Instruction sent next to an uploaded photo.
pub fn describe_photo() -> PromptPair {
    PromptPair {
        id: "Deskripsikan orang di gambar ini secara singkat untuk digunakan sebagai deskripsi \
             karakter video (maksimal 30 kata). Sebutkan fitur wajah, pakaian, gaya, dan suasana \
             hati secara umum. Berikan dalam Bahasa Indonesia."
            .to_string(),
        en: "Briefly describe the person in this image for use as a video character description \
             (max 30 words). Mention general facial features, clothing, style, and mood. \
             Provide in English."
            .to_string(),
    }
}
