//! Bilingual text for the rendered documents.
//!
//! Headings and fixed bullet bodies are addressed by stable [`Msg`] ids, so
//! rewording the English text never breaks the Arabic side. Data labels
//! (site types, sections, audiences, tones, features) are keyed by their
//! canonical English text. Anything missing from the Arabic side renders in
//! English.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::model::{OutputLang, SiteType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Msg {
    Overview,
    TargetAudience,
    PrimaryGoals,
    ToneOfVoice,
    SiteStructure,
    KeyFeatures,
    ContentCta,
    VisualStyle,
    OriginalNotes,
    BlueprintTitle,
    ScopeSummary,
    Industries,
    Regions,
    Languages,
    Currency,
    Payments,
    Compliance,
    Yes,
    No,
    PagesSitemap,
    UserStories,
    NonFunctional,
    Kpis,
    TechStack,
    ContentChecklist,
    Milestones,
    ClarifyingQuestions,
}

impl Msg {
    pub fn en(self) -> &'static str {
        match self {
            Msg::Overview => "Design a high-converting {site} website for {audience}.",
            Msg::TargetAudience => "Target audience",
            Msg::PrimaryGoals => "Primary goals",
            Msg::ToneOfVoice => "Tone of voice",
            Msg::SiteStructure => "Suggested site structure",
            Msg::KeyFeatures => "Key features",
            Msg::ContentCta => "Content & calls to action",
            Msg::VisualStyle => "Visual style",
            Msg::OriginalNotes => "Notes from the original idea",
            Msg::BlueprintTitle => "Project blueprint",
            Msg::ScopeSummary => "Scope summary",
            Msg::Industries => "Industries",
            Msg::Regions => "Regions",
            Msg::Languages => "Languages",
            Msg::Currency => "Currency",
            Msg::Payments => "Online payments",
            Msg::Compliance => "Compliance",
            Msg::Yes => "required",
            Msg::No => "not required",
            Msg::PagesSitemap => "Pages & sitemap",
            Msg::UserStories => "User stories",
            Msg::NonFunctional => "Non-functional requirements",
            Msg::Kpis => "KPIs",
            Msg::TechStack => "Tech stack suggestions",
            Msg::ContentChecklist => "Content checklist",
            Msg::Milestones => "Milestones",
            Msg::ClarifyingQuestions => "Clarifying questions",
        }
    }

    pub fn ar(self) -> Option<&'static str> {
        Some(match self {
            Msg::Overview => "صمّم موقع {site} عالي التحويل موجّهًا إلى {audience}.",
            Msg::TargetAudience => "الجمهور المستهدف",
            Msg::PrimaryGoals => "الأهداف الرئيسية",
            Msg::ToneOfVoice => "نبرة الخطاب",
            Msg::SiteStructure => "هيكل الموقع المقترح",
            Msg::KeyFeatures => "الميزات الأساسية",
            Msg::ContentCta => "المحتوى ودعوات اتخاذ الإجراء",
            Msg::VisualStyle => "الأسلوب البصري",
            Msg::OriginalNotes => "ملاحظات من الفكرة الأصلية",
            Msg::BlueprintTitle => "مخطط المشروع",
            Msg::ScopeSummary => "ملخص النطاق",
            Msg::Industries => "القطاعات",
            Msg::Regions => "المناطق",
            Msg::Languages => "اللغات",
            Msg::Currency => "العملة",
            Msg::Payments => "المدفوعات الإلكترونية",
            Msg::Compliance => "الامتثال",
            Msg::Yes => "مطلوبة",
            Msg::No => "غير مطلوبة",
            Msg::PagesSitemap => "الصفحات وخريطة الموقع",
            Msg::UserStories => "قصص المستخدمين",
            Msg::NonFunctional => "المتطلبات غير الوظيفية",
            Msg::Kpis => "مؤشرات الأداء الرئيسية",
            Msg::TechStack => "التقنيات المقترحة",
            Msg::ContentChecklist => "قائمة المحتوى المطلوب",
            Msg::Milestones => "المراحل الزمنية",
            Msg::ClarifyingQuestions => "أسئلة توضيحية",
        })
    }

    pub fn text(self, lang: OutputLang) -> &'static str {
        match lang {
            OutputLang::En => self.en(),
            OutputLang::Ar => self.ar().unwrap_or_else(|| self.en()),
        }
    }
}

// ── Fixed bullet bodies ───────────────────────────────────────────────────

const GOALS_EN: &[&str] = &[
    "Explain the value proposition clearly on the first screen.",
    "Guide visitors toward one primary call to action.",
    "Build trust with social proof and transparent information.",
];

const GOALS_AR: &[&str] = &[
    "اشرح القيمة المقدمة بوضوح في الشاشة الأولى.",
    "وجّه الزوار نحو دعوة رئيسية واحدة لاتخاذ الإجراء.",
    "ابنِ الثقة من خلال آراء العملاء والمعلومات الواضحة.",
];

const CONTENT_EN: &[&str] = &[
    "Write short, benefit-led headlines and brief paragraphs.",
    "Use one primary call to action per section with consistent wording.",
    "Replace placeholder text with real, specific copy before launch.",
];

const CONTENT_AR: &[&str] = &[
    "اكتب عناوين قصيرة تركّز على الفائدة وفقرات موجزة.",
    "استخدم دعوة رئيسية واحدة لاتخاذ الإجراء في كل قسم بصياغة موحّدة.",
    "استبدل النصوص المؤقتة بمحتوى حقيقي ومحدد قبل الإطلاق.",
];

const VISUAL_EN: &[&str] = &[
    "Clean layout with generous whitespace and a clear visual hierarchy.",
    "Consistent color palette and typography that match the brand.",
    "Accessible contrast and readable font sizes on a mobile-first responsive grid.",
];

const VISUAL_AR: &[&str] = &[
    "تصميم نظيف بمساحات بيضاء واسعة وتسلسل بصري واضح.",
    "لوحة ألوان وخطوط متناسقة تعكس هوية العلامة التجارية.",
    "تباين مناسب وأحجام خطوط مقروءة على تصميم متجاوب يبدأ بالجوال.",
];

pub fn goals(lang: OutputLang) -> &'static [&'static str] {
    match lang {
        OutputLang::En => GOALS_EN,
        OutputLang::Ar => GOALS_AR,
    }
}

pub fn content_guidance(lang: OutputLang) -> &'static [&'static str] {
    match lang {
        OutputLang::En => CONTENT_EN,
        OutputLang::Ar => CONTENT_AR,
    }
}

pub fn visual_style(lang: OutputLang) -> &'static [&'static str] {
    match lang {
        OutputLang::En => VISUAL_EN,
        OutputLang::Ar => VISUAL_AR,
    }
}

// ── Site type labels ──────────────────────────────────────────────────────

pub fn site_label(site: SiteType, lang: OutputLang) -> &'static str {
    match (lang, site) {
        (OutputLang::En, SiteType::Saas) => "SaaS product",
        (OutputLang::En, SiteType::Ecommerce) => "e-commerce store",
        (OutputLang::En, SiteType::Portfolio) => "portfolio",
        (OutputLang::En, SiteType::Restaurant) => "restaurant",
        (OutputLang::En, SiteType::Blog) => "blog",
        (OutputLang::En, SiteType::Event) => "event",
        (OutputLang::En, SiteType::Booking) => "booking service",
        (OutputLang::En, SiteType::Generic) => "business",
        (OutputLang::Ar, SiteType::Saas) => "منتج برمجي كخدمة (SaaS)",
        (OutputLang::Ar, SiteType::Ecommerce) => "متجر إلكتروني",
        (OutputLang::Ar, SiteType::Portfolio) => "معرض أعمال",
        (OutputLang::Ar, SiteType::Restaurant) => "مطعم",
        (OutputLang::Ar, SiteType::Blog) => "مدونة",
        (OutputLang::Ar, SiteType::Event) => "فعالية",
        (OutputLang::Ar, SiteType::Booking) => "خدمة حجز",
        (OutputLang::Ar, SiteType::Generic) => "نشاط تجاري",
    }
}

// ── Data labels (English key → Arabic) ────────────────────────────────────

const AR_LABELS: &[(&str, &str)] = &[
    // audiences
    ("Prospective customers and early adopters", "العملاء المحتملون والمستخدمون الأوائل"),
    ("Startup founders", "مؤسسو الشركات الناشئة"),
    ("Small business owners", "أصحاب الأعمال الصغيرة"),
    ("Enterprise teams", "فرق الشركات الكبرى"),
    ("Developers", "المطورون"),
    ("Students", "الطلاب"),
    ("Educators", "المعلمون"),
    ("Parents and families", "الآباء والعائلات"),
    ("Freelancers", "المستقلون"),
    ("Content creators", "صناع المحتوى"),
    ("Online shoppers", "المتسوقون عبر الإنترنت"),
    ("Travelers", "المسافرون"),
    ("Patients", "المرضى"),
    ("Food lovers", "محبو الطعام"),
    ("Women", "النساء"),
    ("Remote teams and managers", "الفرق عن بُعد والمدراء"),
    ("Recruiters and hiring managers", "مسؤولو التوظيف"),
    ("Investors", "المستثمرون"),
    ("Event attendees", "حضور الفعاليات"),
    // tones
    ("friendly", "ودود"),
    ("confident", "واثق"),
    ("concise", "موجز"),
    ("professional", "احترافي"),
    ("playful", "مرح"),
    ("luxurious", "فاخر"),
    ("minimal", "بسيط"),
    ("bold", "جريء"),
    ("calm", "هادئ"),
    ("trustworthy", "موثوق"),
    ("modern", "عصري"),
    ("inspiring", "ملهم"),
    // sections
    ("Hero with value proposition", "القسم الرئيسي مع القيمة المقدمة"),
    ("Social proof and customer logos", "إثبات اجتماعي وشعارات العملاء"),
    ("Key features", "الميزات الأساسية"),
    ("How it works", "كيف يعمل"),
    ("Pricing", "الأسعار"),
    ("Testimonials", "آراء العملاء"),
    ("FAQ", "الأسئلة الشائعة"),
    ("Final call to action", "دعوة ختامية لاتخاذ الإجراء"),
    ("Footer", "تذييل الصفحة"),
    ("Hero with featured collection", "القسم الرئيسي مع تشكيلة مميزة"),
    ("Featured categories", "الفئات المميزة"),
    ("Best sellers", "الأكثر مبيعًا"),
    ("Promotions", "العروض"),
    ("Customer reviews", "تقييمات العملاء"),
    ("Shipping and returns", "الشحن والإرجاع"),
    ("Newsletter signup", "الاشتراك في النشرة البريدية"),
    ("Hero introduction", "مقدمة تعريفية"),
    ("Selected work", "أعمال مختارة"),
    ("Case studies", "دراسات الحالة"),
    ("About me", "نبذة عني"),
    ("Services", "الخدمات"),
    ("Contact", "تواصل معنا"),
    ("Hero with signature dish", "القسم الرئيسي مع الطبق المميز"),
    ("Menu highlights", "أبرز الأطباق"),
    ("About the kitchen", "عن المطبخ"),
    ("Reservations", "الحجوزات"),
    ("Gallery", "معرض الصور"),
    ("Location and opening hours", "الموقع وساعات العمل"),
    ("Featured post", "المقال المميز"),
    ("Latest articles", "أحدث المقالات"),
    ("Categories", "التصنيفات"),
    ("About the author", "عن الكاتب"),
    ("Hero with date and venue", "القسم الرئيسي مع الموعد والمكان"),
    ("About the event", "عن الفعالية"),
    ("Speakers", "المتحدثون"),
    ("Agenda", "جدول الأعمال"),
    ("Tickets", "التذاكر"),
    ("Venue and travel", "المكان والسفر"),
    ("Sponsors", "الرعاة"),
    ("Hero with booking call to action", "القسم الرئيسي مع دعوة للحجز"),
    ("How booking works", "كيف يتم الحجز"),
    ("Availability", "المواعيد المتاحة"),
    ("Hero", "القسم الرئيسي"),
    ("About", "من نحن"),
    ("Benefits", "المزايا"),
    // features
    ("Pricing with clear plan comparison", "أسعار مع مقارنة واضحة بين الباقات"),
    ("Free trial or demo signup", "تسجيل لتجربة مجانية أو عرض توضيحي"),
    ("Integrations", "التكاملات"),
    ("Product catalog with filters", "كتالوج منتجات مع فلاتر"),
    ("Shopping cart & checkout", "سلة التسوق وإتمام الشراء"),
    ("Secure payments", "مدفوعات آمنة"),
    ("Order tracking", "تتبع الطلبات"),
    ("Project gallery", "معرض المشاريع"),
    ("Contact form", "نموذج تواصل"),
    ("Online menu", "قائمة طعام إلكترونية"),
    ("Table reservations", "حجز الطاولات"),
    ("Map & location", "الخريطة والموقع"),
    ("Blog", "المدونة"),
    ("Categories & tags", "التصنيفات والوسوم"),
    ("Search & filtering", "البحث والتصفية"),
    ("Event schedule / calendar", "جدول الفعالية / التقويم"),
    ("Speaker profiles", "ملفات المتحدثين"),
    ("Ticketing & registration", "التذاكر والتسجيل"),
    ("Online booking & scheduling", "الحجز وجدولة المواعيد عبر الإنترنت"),
    ("Service catalog", "دليل الخدمات"),
    ("Automated reminders", "تذكيرات تلقائية"),
    ("About & team", "من نحن والفريق"),
    ("Image gallery", "معرض الصور"),
    ("User accounts & login", "حسابات المستخدمين وتسجيل الدخول"),
    ("User dashboard", "لوحة تحكم المستخدم"),
    ("Multilingual support", "دعم تعدد اللغات"),
    ("Live chat / WhatsApp", "دردشة مباشرة / واتساب"),
    ("Video showcase", "عرض فيديو"),
    ("Analytics & reporting", "التحليلات والتقارير"),
    ("Wishlist", "قائمة الأمنيات"),
    ("Discounts & coupons", "الخصومات والكوبونات"),
    ("Online ordering & delivery", "الطلب والتوصيل عبر الإنترنت"),
    ("Comments", "التعليقات"),
    ("SEO optimization", "تحسين محركات البحث"),
    // pages
    ("Home", "الرئيسية"),
    ("Features", "الميزات"),
    ("Login", "تسجيل الدخول"),
    ("Sign up", "إنشاء حساب"),
    ("Shop", "المتجر"),
    ("Product details", "تفاصيل المنتج"),
    ("Cart", "السلة"),
    ("Account", "الحساب"),
    ("Work", "الأعمال"),
    ("Case study", "دراسة حالة"),
    ("Menu", "قائمة الطعام"),
    ("Article details", "تفاصيل المقال"),
    ("Venue", "المكان"),
    ("Book now", "احجز الآن"),
    ("Billing", "الفواتير"),
    ("Checkout", "إتمام الشراء"),
    // scope values
    ("General", "عام"),
    ("Global", "عالمي"),
    ("English", "الإنجليزية"),
    ("Arabic", "العربية"),
    ("French", "الفرنسية"),
    ("Egypt", "مصر"),
    ("Saudi Arabia", "السعودية"),
    ("United Arab Emirates", "الإمارات العربية المتحدة"),
    ("Qatar", "قطر"),
    ("Kuwait", "الكويت"),
    ("Jordan", "الأردن"),
    ("Morocco", "المغرب"),
    ("Middle East & GCC", "الشرق الأوسط والخليج"),
    ("Europe", "أوروبا"),
    ("United Kingdom", "المملكة المتحدة"),
    ("United States", "الولايات المتحدة"),
    // non-functional
    ("Responsive, mobile-first layout", "تصميم متجاوب يبدأ بالجوال"),
    (
        "Core Web Vitals: LCP under 2.5s and CLS under 0.1",
        "مؤشرات أداء الويب الأساسية: LCP أقل من 2.5 ثانية و CLS أقل من 0.1",
    ),
    ("WCAG 2.1 AA accessibility", "إمكانية الوصول وفق WCAG 2.1 AA"),
    (
        "SEO basics: semantic HTML, meta tags, sitemap.xml and Open Graph",
        "أساسيات تحسين محركات البحث: HTML دلالي ووسوم ميتا و sitemap.xml و Open Graph",
    ),
    (
        "Security: HTTPS, secure headers and spam protection on forms",
        "الأمان: HTTPS وترويسات آمنة وحماية النماذج من الرسائل المزعجة",
    ),
    (
        "Full RTL layout with Arabic typography (e.g., Cairo or Tajawal fonts)",
        "تخطيط كامل من اليمين إلى اليسار مع خطوط عربية (مثل Cairo أو Tajawal)",
    ),
];

static AR_INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| AR_LABELS.iter().copied().collect());

/// Translate a canonical English label; unknown labels pass through as-is.
pub fn label(text: &str, lang: OutputLang) -> &str {
    match lang {
        OutputLang::En => text,
        OutputLang::Ar => AR_INDEX.get(text).copied().unwrap_or(text),
    }
}

/// Join a list in the output language's list style.
pub fn join(items: &[String], lang: OutputLang) -> String {
    let sep = match lang {
        OutputLang::En => ", ",
        OutputLang::Ar => "، ",
    };
    items
        .iter()
        .map(|s| label(s, lang))
        .collect::<Vec<_>>()
        .join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;

    #[test]
    fn arabic_falls_back_to_english_for_unknown_labels() {
        assert_eq!(label("Testimonials", OutputLang::Ar), "آراء العملاء");
        assert_eq!(label("Rust backend", OutputLang::Ar), "Rust backend");
        assert_eq!(label("Testimonials", OutputLang::En), "Testimonials");
    }

    #[test]
    fn every_default_label_has_arabic() {
        for site in SiteType::ALL {
            let labels = defaults::sections(site)
                .iter()
                .chain(defaults::features(site))
                .chain(defaults::pages(site))
                .copied()
                .chain(std::iter::once(defaults::payments_page(site)));
            for s in labels {
                assert!(AR_INDEX.contains_key(s), "missing Arabic for `{s}`");
            }
        }
        for t in defaults::FALLBACK_TONE {
            assert!(AR_INDEX.contains_key(t), "missing Arabic for `{t}`");
        }
        for r in defaults::NON_FUNCTIONAL.iter().chain([&defaults::RTL_REQUIREMENT]) {
            assert!(AR_INDEX.contains_key(r), "missing Arabic for `{r}`");
        }
    }

    #[test]
    fn join_uses_arabic_comma() {
        let items = vec!["Developers".to_string(), "Students".to_string()];
        assert_eq!(join(&items, OutputLang::En), "Developers, Students");
        assert_eq!(join(&items, OutputLang::Ar), "المطورون، الطلاب");
    }

    #[test]
    fn every_message_has_both_languages() {
        assert!(Msg::Overview.text(OutputLang::Ar).contains("{site}"));
        assert_eq!(Msg::Kpis.text(OutputLang::En), "KPIs");
    }
}
