use super::PromptPair;

/// Ask for a short (max 2 sentences) description of the product's ideal audience.
pub fn target_audience(product_name: &str, product_category: &str) -> PromptPair {
    PromptPair {
        id: format!(
            "Hasilkan deskripsi singkat (maksimal 2 kalimat) untuk target audiens ideal produk \
             '{product_name}' (kategori: {product_category}) dalam Bahasa Indonesia. \
             Fokus pada demografi, minat, dan kebutuhan."
        ),
        en: format!(
            "Generate a brief description (max 2 sentences) for the ideal target audience of \
             product '{product_name}' (category: {product_category}) in English. \
             Focus on demographics, interests, and needs."
        ),
    }
}

/// Ask for a one-sentence, slogan-like unique selling proposition.
pub fn main_message(product_name: &str, product_category: &str) -> PromptPair {
    PromptPair {
        id: format!(
            "Hasilkan pesan utama atau Unique Selling Proposition (USP) yang sangat singkat \
             (maksimal 1 kalimat, seperti slogan) untuk produk '{product_name}' \
             (kategori: {product_category}) dalam Bahasa Indonesia."
        ),
        en: format!(
            "Generate a very concise main message or Unique Selling Proposition (USP) \
             (max 1 sentence, like a slogan) for product '{product_name}' \
             (category: {product_category}) in English."
        ),
    }
}
