use dioxus::prelude::*;

use super::accordion_md::AccordionMarkdown;

pub(crate) const FAQ_MD: &str = include_str!("../../../docs/faq.md");

#[component]
pub fn FaqView() -> Element {
    rsx! {
        section { class: "page-card faq-view",
            AccordionMarkdown { source: FAQ_MD }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FAQ_MD;
    use crate::components::accordion_md::split_sections;

    #[test]
    fn test_faq_document_has_five_questions() {
        let (preamble, sections) = split_sections(FAQ_MD);
        assert!(preamble.contains("Frequently Asked Questions"));
        assert_eq!(sections.len(), 5);
    }

    #[test]
    fn test_questions_in_document_order() {
        let (_, sections) = split_sections(FAQ_MD);
        assert_eq!(sections[0].question, "What is the purpose of this study?");
        assert_eq!(
            sections[4].question,
            "Can I withdraw from the study at any time?"
        );
    }
}
