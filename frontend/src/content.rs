//! Static page content: the review screenshots and the cards of both
//! card tracks.

use crate::carousel::cards::TrackKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Review {
    pub file: &'static str,
    pub alt: &'static str,
}

pub const REVIEWS: [Review; 12] = [
    Review { file: "review1.jpeg", alt: "رأي طالب عن تجربته في تحفيظ القرآن" },
    Review { file: "review2.jpeg", alt: "تقييم ولي أمر لجودة التعليم" },
    Review { file: "review3.jpeg", alt: "شهادة طالبة عن تحسن مستواها" },
    Review { file: "review4.jpeg", alt: "رأي إيجابي عن المعلمات" },
    Review { file: "review5.jpeg", alt: "تجربة ناجحة في التحفيظ" },
    Review { file: "review6.jpeg", alt: "تقييم خمس نجوم" },
    Review { file: "review7.jpeg", alt: "شكر من ولي أمر" },
    Review { file: "review8.jpeg", alt: "رأي عن المواعيد المرنة" },
    Review { file: "review9.jpeg", alt: "تجربة في تصحيح التلاوة" },
    Review { file: "review10.jpeg", alt: "تقييم الدعم الفني" },
    Review { file: "review11.jpeg", alt: "فعالية البرامج التعليمية" },
    Review { file: "review12.jpeg", alt: "تطور سريع للطالب" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

const FEATURE_CARDS: [Card; 6] = [
    Card { icon: "📖", title: "تحفيظ بإتقان", body: "خطة حفظ ومراجعة تناسب مستوى كل طالب." },
    Card { icon: "🎙️", title: "تصحيح التلاوة", body: "متابعة مباشرة لأحكام التجويد ومخارج الحروف." },
    Card { icon: "🕒", title: "مواعيد مرنة", body: "اختر الأوقات التي تناسبك طوال الأسبوع." },
    Card { icon: "👩‍🏫", title: "معلمات مجازات", body: "نخبة من المعلمات الحاصلات على الإجازة." },
    Card { icon: "📊", title: "تقارير دورية", body: "تقارير واضحة لولي الأمر عن تقدم الطالب." },
    Card { icon: "🏅", title: "شهادات إتمام", body: "شهادة معتمدة عند إتمام كل مرحلة." },
];

const SUPPORT_CARDS: [Card; 4] = [
    Card { icon: "💬", title: "دعم فوري", body: "فريق الدعم متاح للرد على استفساراتكم." },
    Card { icon: "📞", title: "تواصل هاتفي", body: "اتصل بنا في أي وقت خلال ساعات العمل." },
    Card { icon: "🛠️", title: "مساعدة تقنية", body: "نساعدك في إعداد الحصص والاتصال." },
    Card { icon: "📅", title: "جدولة الحصص", body: "تعديل المواعيد بسهولة عند الحاجة." },
];

impl TrackKind {
    pub fn heading(self) -> &'static str {
        match self {
            TrackKind::Features => "مميزات المنصة",
            TrackKind::Support => "الدعم والمساندة",
        }
    }

    pub fn cards(self) -> &'static [Card] {
        match self {
            TrackKind::Features => &FEATURE_CARDS,
            TrackKind::Support => &SUPPORT_CARDS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_review_has_alt_text() {
        assert!(REVIEWS.iter().all(|review| !review.alt.trim().is_empty()));
    }

    #[test]
    fn every_track_has_cards() {
        for kind in TrackKind::ALL {
            assert!(!kind.cards().is_empty(), "{} has no cards", kind.name());
        }
    }
}
