//! Prompts for the summarization call.
//!
//! The collaborator receives a fixed system instruction, a fixed set of
//! few-shot user/assistant pairs, and then the assembled corpus as the final
//! user turn. Example corpora use the same annotated block format the
//! aggregator emits.

/// System instruction for the archive summarization call.
pub const SYSTEM_PROMPT: &str = r#"You are an archivist assistant labelling Singapore (.sg) web archives. You will be given the extracted text of the pages of one archived website; each page is annotated with the URL it was captured from. Describe the website as a whole with a single JSON object containing exactly these fields:
- "title": the name of the website or the organisation behind it, as a short string.
- "categories": an array of one to three subject labels drawn from: Arts, Business, Community, Education, Entertainment, Government, Health, Heritage, Politics, Religion, Science, Society, Sports, Technology.
- "abstract": two to four neutral sentences saying what the website is about and who publishes it.
Base your answer only on the provided text. Respond with the JSON object and nothing else."#;

/// One few-shot user/assistant example pair.
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub user: &'static str,
    pub assistant: &'static str,
}

/// Fixed few-shot examples sent before the real corpus.
pub const EXAMPLES: [Example; 2] = [
    Example {
        user: "\n\n--- Page: https://gardenclub.sg/about ---\nTitle: Garden Club Singapore\n\nContent:Garden Club Singapore brings together hobby gardeners across the island.\nWe organise monthly plant swaps, talks by horticulturists and visits to community gardens.\n\n\n--- Page: https://gardenclub.sg/membership ---\nTitle: Join Us\n\nContent:Membership is open to all residents of Singapore.\nAnnual fees are kept low thanks to our volunteers.",
        assistant: r#"{"title": "Garden Club Singapore", "categories": ["Community", "Society"], "abstract": "Garden Club Singapore is a hobbyist society for gardeners in Singapore. The site describes the club's monthly plant swaps, horticultural talks and garden visits, and explains how residents can become members. It is published by the club's volunteer committee."}"#,
    },
    Example {
        user: "\n\n--- Page: https://www.heritagetrust.org.sg/ ---\nTitle: Heritage Trust\n\nContent:The Heritage Trust documents and preserves the built heritage of Singapore.\nOur research covers shophouses, places of worship and colonial-era public buildings.\n\n\n--- Page: https://www.heritagetrust.org.sg/programmes ---\nTitle: Programmes\n\nContent:We run guided walks, school workshops and an annual photography competition.",
        assistant: r#"{"title": "Heritage Trust", "categories": ["Heritage", "Education"], "abstract": "Heritage Trust is an organisation that documents and preserves Singapore's built heritage, including shophouses and colonial-era buildings. The website presents its research and outreach programmes such as guided walks, school workshops and a photography competition."}"#,
    },
];
