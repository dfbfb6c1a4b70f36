//! Vocabulary tables used by the classifier.
//!
//! Each table is an ordered list of `(label, pattern)` pairs. Patterns run
//! against trimmed, lower-cased text, so they are written lower-case. English
//! alternatives use word boundaries; Arabic alternatives are plain
//! containment because conjunctions and articles attach to the word
//! (e.g. "ودفع").

use regex::Regex;
use std::sync::LazyLock;

use crate::model::SiteType;

/// A compiled vocabulary rule.
#[derive(Debug)]
pub struct Rule<L> {
    pub label: L,
    pub regex: Regex,
}

impl<L: Copy> Rule<L> {
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

fn compile<L: Copy>(table: &[(L, &'static str)]) -> Vec<Rule<L>> {
    table
        .iter()
        .filter_map(|(label, pattern)| {
            Regex::new(pattern).ok().map(|regex| Rule { label: *label, regex })
        })
        .collect()
}

macro_rules! rules {
    ($name:ident, $table:ident, $label:ty) => {
        pub static $name: LazyLock<Vec<Rule<$label>>> = LazyLock::new(|| compile($table));
    };
}

// ── Audience ──────────────────────────────────────────────────────────────

pub const AUDIENCE: &[(&str, &str)] = &[
    ("Startup founders", r"\bstart-?ups?\b|\bfounders?\b|رواد الأعمال|ريادة الأعمال|شركات ناشئة"),
    ("Small business owners", r"\bsmall business|\bsmbs?\b|\blocal business|الشركات الصغيرة|مشاريع صغيرة"),
    ("Enterprise teams", r"\benterprises?\b|\bcorporates?\b|\bb2b\b|الشركات الكبرى|المؤسسات"),
    ("Developers", r"\bdevelopers?\b|\bengineers?\b|\bprogrammers?\b|المطورين|مطورين|مبرمجين"),
    ("Students", r"\bstudents?\b|\blearners?\b|الطلاب|طلاب"),
    ("Educators", r"\bteachers?\b|\beducators?\b|\btutors?\b|المعلمين|معلمين"),
    ("Parents and families", r"\bparents?\b|\bfamil(?:y|ies)\b|أولياء الأمور|العائلات|الأهل"),
    ("Freelancers", r"\bfreelancers?\b|المستقلين|مستقلين"),
    ("Content creators", r"\bcreators?\b|\binfluencers?\b|صناع المحتوى|مؤثرين"),
    ("Online shoppers", r"\bshoppers?\b|\bbuyers?\b|\bconsumers?\b|المتسوقين|المشترين"),
    ("Travelers", r"\btravel(?:l)?ers?\b|\btourists?\b|المسافرين|السياح"),
    ("Patients", r"\bpatients?\b|المرضى"),
    ("Food lovers", r"\bfoodies?\b|\bdiners?\b|\bfood lovers?\b|محبي الطعام|عشاق الطعام"),
    ("Women", r"\bwomen\b|\bladies\b|النساء|السيدات"),
    ("Remote teams and managers", r"\bremote teams?\b|\bmanagers?\b|\bagencies\b|\bagency\b|المدراء|فرق العمل"),
    ("Recruiters and hiring managers", r"\brecruiters?\b|\bhiring\b|\bemployers?\b|أصحاب العمل|التوظيف"),
    ("Investors", r"\binvestors?\b|المستثمرين"),
    ("Event attendees", r"\battendees?\b|\bparticipants?\b|الحضور|المشاركين"),
];

rules!(AUDIENCE_RULES, AUDIENCE, &'static str);

// ── Site type (ordered: first match wins) ─────────────────────────────────

pub const SITE_TYPES: &[(SiteType, &str)] = &[
    (
        SiteType::Saas,
        r"\bsaas\b|software as a service|\bsubscriptions?\b|\bb2b\b|\bdashboards?\b|\bcrm\b|\bfree trial|\bonboarding\b|\btime tracking\b|\binvoicing\b|برمجيات|خدمة سحابية|اشتراك شهري|لوحة تحكم",
    ),
    (
        SiteType::Ecommerce,
        r"e-?commerce|\bonline store|\b(?:online |web |e-?)shops?\b|\bshops? (?:for|online|selling)\b|\b(?:my|our|a|an) (?:small |online )?shop\b|\bshopping\b|\bstore\b|\bcart\b|\bcheckout\b|\bproducts?\b|\bsell(?:ing)?\b|\bmerch(?:andise)?\b|متجر|تسوق|سلة|منتجات",
    ),
    (
        SiteType::Portfolio,
        r"\bportfolio|\bmy work\b|\bshowcase\b|\bphotographer\b|\bresume\b|\bcv\b|\bpersonal (?:site|website|brand)\b|معرض أعمال|أعمالي|سيرة ذاتية|ملف أعمال",
    ),
    (
        SiteType::Restaurant,
        r"\brestaurants?\b|\bcafe\b|\bcafé\b|\bcoffee shop\b|\bbakery\b|\bmenu\b|\bdining\b|\bfood truck\b|\bbistro\b|\bcatering\b|مطعم|مقهى|كافيه|قائمة الطعام|مخبز",
    ),
    (
        SiteType::Blog,
        r"\bblog|\bnewsletter\b|\bmagazine\b|\barticles?\b|\bpodcast\b|\bpublication\b|مدونة|مقالات|مجلة",
    ),
    (
        SiteType::Event,
        r"\bevents?\b|\bconference\b|\bsummit\b|\bwebinar\b|\bworkshop\b|\bmeetup\b|\bfestival\b|\bwedding\b|\bconcert\b|\btickets?\b|\bhackathon\b|فعالية|مؤتمر|مهرجان|حفل|تذاكر|ورشة",
    ),
    (
        SiteType::Booking,
        r"\bbooking\b|\bbook (?:a|an|your)\b|\breservations?\b|\breserve\b|\bappointments?\b|\bscheduling\b|\bclinic\b|\bsalon\b|\bhotel\b|\bspa\b|\brentals?\b|حجز|حجوزات|موعد|مواعيد|عيادة|فندق|صالون",
    ),
];

rules!(SITE_TYPE_RULES, SITE_TYPES, SiteType);

// ── Project mode ──────────────────────────────────────────────────────────

pub const PROJECT_MODE: &str = r"\bprojects?\b|\bspecs?\b|\bspecification\b|\bproposal\b|\bmilestones?\b|\bmvp\b|\broadmap\b|\bplanning\b|\bblueprint\b|\brequirements\b|\bscope\b|\bprd\b|\brfp\b|مشروع|متطلبات|خطة|مراحل|مواصفات|نطاق العمل";

pub static PROJECT_MODE_RULE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(PROJECT_MODE).ok());

// ── Tone (collect all) ────────────────────────────────────────────────────

pub const TONES: &[(&str, &str)] = &[
    ("friendly", r"\bfriendly\b|\bwarm\b|\bapproachable\b|ودود|ودي"),
    ("professional", r"\bprofessional\b|\bcorporate\b|\bformal\b|احترافي|رسمي|مهني"),
    ("playful", r"\bplayful\b|\bfun\b|\bwhimsical\b|\bquirky\b|مرح|ممتع"),
    ("luxurious", r"\bluxur(?:y|ious)\b|\bpremium\b|\belegant\b|\bhigh-end\b|فاخر|راقي|أنيق"),
    ("minimal", r"\bminimal(?:ist)?\b|\bclean\b|\bsimple\b|بسيط|نظيف"),
    ("bold", r"\bbold\b|\bconfident\b|\bpowerful\b|جريء|واثق"),
    ("calm", r"\bcalm\b|\bsoothing\b|\brelax(?:ed|ing)?\b|هادئ|مريح"),
    ("trustworthy", r"\btrustworthy\b|\btrusted\b|\breliable\b|\bsecure\b|موثوق|آمن"),
    ("modern", r"\bmodern\b|\bsleek\b|\bfuturistic\b|عصري|حديث"),
    ("inspiring", r"\binspir(?:e|ing|ational)\b|\bmotivat(?:e|ing|ional)\b|ملهم|تحفيز"),
];

rules!(TONE_RULES, TONES, &'static str);

// ── Features (collect all) ────────────────────────────────────────────────

pub const FEATURES: &[(&str, &str)] = &[
    ("Pricing with clear plan comparison", r"\bpricing\b|\bplans? comparison\b|\bcompare plans\b|\bsubscription plans?\b|\bpackages\b|الأسعار|أسعار|باقات"),
    ("FAQ", r"\bfaqs?\b|\bfrequently asked\b|الأسئلة الشائعة|أسئلة شائعة"),
    ("Testimonials", r"\btestimonials?\b|\breviews?\b|\bsocial proof\b|آراء العملاء|تقييمات"),
    ("Blog", r"\bblog|\barticles?\b|\bnews\b|مدونة|مقالات"),
    ("Contact form", r"\bcontact\b|\bget in touch\b|تواصل|اتصل بنا"),
    ("Newsletter signup", r"\bnewsletter\b|\bemail (?:list|signup|sign-up)\b|\bsubscribe\b|نشرة بريدية|النشرة البريدية"),
    ("Shopping cart & checkout", r"\bcart\b|\bcheckout\b|\bbuy\b|\bpurchase\b|سلة|شراء"),
    ("Search & filtering", r"\bsearch\b|\bfilters?\b|\bfiltering\b|بحث|تصفية"),
    ("Image gallery", r"\bgallery\b|\bphotos?\b|\bimages?\b|معرض صور|صور"),
    ("Online booking & scheduling", r"\bbooking\b|\breservations?\b|\bappointments?\b|حجز|موعد|مواعيد"),
    ("User accounts & login", r"\blogin\b|\blog in\b|\bsign ?up\b|\baccounts?\b|\bmembers?(?:hip)?\b|تسجيل الدخول|حساب|عضوية"),
    ("User dashboard", r"\bdashboards?\b|لوحة تحكم"),
    ("Multilingual support", r"\bmulti-?lingual\b|\bbilingual\b|\barabic\b|\btranslations?\b|\bi18n\b|ثنائي اللغة|متعدد اللغات|عربي"),
    ("Map & location", r"\bmaps?\b|\blocations?\b|\bdirections\b|خريطة|الموقع الجغرافي"),
    ("Live chat / WhatsApp", r"\blive chat\b|\bchat\b|\bchatbot\b|\bwhatsapp\b|دردشة|محادثة|واتساب"),
    ("Video showcase", r"\bvideos?\b|فيديو"),
    ("Analytics & reporting", r"\banalytics\b|\breports?\b|\breporting\b|تحليلات|تقارير"),
    ("Wishlist", r"\bwishlists?\b|المفضلة|قائمة الأمنيات"),
    ("Discounts & coupons", r"\bcoupons?\b|\bdiscounts?\b|\bpromo(?:tions?)?\b|كوبون|خصم|خصومات"),
    ("Event schedule / calendar", r"\bcalendar\b|\bagenda\b|\bschedule\b|تقويم|جدول"),
    ("Ticketing & registration", r"\btickets?\b|\bticketing\b|\bregistration\b|\brsvp\b|تذاكر"),
    ("Online menu", r"\bmenu\b|قائمة الطعام|المنيو"),
    ("Online ordering & delivery", r"\bdelivery\b|\border online\b|\btakeaway\b|توصيل|اطلب"),
    ("Integrations", r"\bintegrations?\b|\bapi\b|تكامل"),
    ("Case studies", r"\bcase stud(?:y|ies)\b|دراسات حالة|دراسة حالة"),
    ("About & team", r"\babout us\b|\bour team\b|\bteam page\b|من نحن|فريق العمل"),
    ("Comments", r"\bcomments?\b|تعليقات"),
    ("SEO optimization", r"\bseo\b|محركات البحث"),
];

rules!(FEATURE_RULES, FEATURES, &'static str);

// ── Industries (collect all) ──────────────────────────────────────────────

pub const INDUSTRIES: &[(&str, &str)] = &[
    ("Fashion", r"\bfashion\b|\bclothing\b|\bapparel\b|أزياء|ملابس|موضة"),
    ("Food & beverage", r"\bfood\b|\brestaurants?\b|\bcafe\b|\bbakery\b|\bcatering\b|\bcoffee\b|طعام|مطعم|مخبز|قهوة"),
    ("Healthcare & wellness", r"\bhealth(?:care)?\b|\bmedical\b|\bclinic\b|\bdoctors?\b|\bdental\b|\bfitness\b|\bwellness\b|\bgym\b|صحة|طبي|عيادة|طبيب|لياقة"),
    ("Education", r"\beducation(?:al)?\b|\bcourses?\b|\blearning\b|\bschools?\b|\btutoring\b|\bacademy\b|تعليم|دورات|مدرسة|أكاديمية"),
    ("Finance", r"\bfintech\b|\bfinance\b|\bfinancial\b|\bbanking\b|\binvest(?:ing|ment)?\b|\baccounting\b|\binsurance\b|مالية|بنك|استثمار|محاسبة|تأمين"),
    ("Real estate", r"\breal estate\b|\bpropert(?:y|ies)\b|\bapartments?\b|عقارات|عقار|شقق"),
    ("Travel & hospitality", r"\btravel\b|\btourism\b|\bhotels?\b|\bflights?\b|سفر|سياحة|فندق|رحلات"),
    ("Technology", r"\btech\b|\btechnology\b|\bsoftware\b|\bsaas\b|\bdevelopers?\b|تقنية|برمجيات|تكنولوجيا"),
    ("Beauty", r"\bbeauty\b|\bsalon\b|\bcosmetics?\b|\bskincare\b|\bspa\b|تجميل|صالون|مستحضرات"),
    ("Nonprofit", r"\bnon-?profit\b|\bcharity\b|\bngo\b|\bdonations?\b|خيري|جمعية|تبرع"),
    ("Productivity", r"\bproductivity\b|\btime tracking\b|\bproject management\b|\btask management\b|إنتاجية|إدارة المهام"),
    ("Arts & entertainment", r"\bmusic\b|\bconcerts?\b|\bart\b|\bphotography\b|\bentertainment\b|موسيقى|فنون|تصوير|ترفيه"),
    ("Sports", r"\bsports?\b|\bfootball\b|\bsoccer\b|رياضة|كرة القدم"),
    ("Automotive", r"\bautomotive\b|\bcars?\b|سيارات"),
    ("Legal", r"\blegal\b|\blaw firm\b|\blawyers?\b|محاماة|محامي"),
];

rules!(INDUSTRY_RULES, INDUSTRIES, &'static str);

// ── Regions (collect all) ─────────────────────────────────────────────────

pub const REGIONS: &[(&str, &str)] = &[
    ("Egypt", r"\begypt(?:ian)?\b|\bcairo\b|\balexandria\b|مصر|القاهرة|الإسكندرية"),
    ("Saudi Arabia", r"\bsaudi\b|\bksa\b|\briyadh\b|\bjeddah\b|السعودية|الرياض|جدة"),
    ("United Arab Emirates", r"\buae\b|\bemirates\b|\bdubai\b|\babu dhabi\b|الإمارات|دبي|أبوظبي|أبو ظبي"),
    ("Qatar", r"\bqatar\b|\bdoha\b|قطر|الدوحة"),
    ("Kuwait", r"\bkuwait\b|الكويت"),
    ("Jordan", r"\bjordan\b|\bamman\b|الأردن"),
    ("Morocco", r"\bmorocco\b|\bcasablanca\b|المغرب"),
    ("Middle East & GCC", r"\bgulf\b|\bgcc\b|\bmiddle east\b|\bmena\b|الخليج|الشرق الأوسط"),
    ("Europe", r"\beurope(?:an)?\b|\beu\b|\bgermany\b|\bfrance\b|\bspain\b|\bitaly\b|أوروبا|ألمانيا|فرنسا"),
    ("United Kingdom", r"\buk\b|\bunited kingdom\b|\bbritain\b|\blondon\b|\bengland\b|بريطانيا|المملكة المتحدة|لندن"),
    ("United States", r"\busa\b|\bunited states\b|\bamerica\b|\bnew york\b|\bcalifornia\b|أمريكا|الولايات المتحدة"),
];

rules!(REGION_RULES, REGIONS, &'static str);

// ── Languages (collect all) ───────────────────────────────────────────────

pub const LANGUAGES: &[(&str, &str)] = &[
    ("English", r"\benglish\b|\bbilingual\b|الإنجليزية|الانجليزية|إنجليزي|انجليزي"),
    ("Arabic", r"\barabic\b|\bbilingual\b|\p{Arabic}"),
    ("French", r"\bfrench\b|الفرنسية|فرنسي"),
];

rules!(LANGUAGE_RULES, LANGUAGES, &'static str);

// ── Currency (ordered: first match wins) ──────────────────────────────────

pub const CURRENCIES: &[(&str, &str)] = &[
    ("EGP", r"\begp\b|\begyptian pounds?\b|\begypt(?:ian)?\b|\bcairo\b|\balexandria\b|جنيه مصري|مصر|القاهرة|الإسكندرية"),
    ("SAR", r"\bsar\b|\briyals?\b|\bsaudi\b|\bksa\b|\briyadh\b|\bjeddah\b|ريال|السعودية|الرياض|جدة"),
    ("AED", r"\baed\b|\bdirhams?\b|\buae\b|\bdubai\b|\babu dhabi\b|\bemirates\b|درهم|الإمارات|دبي|أبوظبي|أبو ظبي"),
    ("USD", r"\busd\b|\$|\bdollars?\b|\busa\b|\bunited states\b|دولار"),
    ("EUR", r"\beur\b|€|\beuros?\b|\beurope\b|يورو|أوروبا"),
    ("GBP", r"\bgbp\b|£|\bpounds?\b|\bsterling\b|\buk\b|\bunited kingdom\b|إسترليني"),
];

rules!(CURRENCY_RULES, CURRENCIES, &'static str);

// ── Compliance (collect all, no fallback) ─────────────────────────────────

pub const COMPLIANCE: &[(&str, &str)] = &[
    ("GDPR", r"\bgdpr\b|\bdata protection\b"),
    ("HIPAA", r"\bhipaa\b|\bpatient data\b|\bmedical records\b"),
    ("PCI-DSS", r"\bpci\b|\bpci-dss\b|\bcard payments\b"),
    ("CCPA", r"\bccpa\b|\bcalifornia privacy\b"),
    ("WCAG accessibility", r"\bwcag\b|\baccessib(?:le|ility)\b|\ba11y\b|إمكانية الوصول"),
    ("Cookie consent", r"\bcookies?\b|\bcookie consent\b|ملفات تعريف الارتباط"),
    ("PDPL", r"\bpdpl\b|نظام حماية البيانات|حماية البيانات الشخصية"),
    ("COPPA", r"\bcoppa\b|\bchildren\b|\bkids\b|أطفال"),
];

rules!(COMPLIANCE_RULES, COMPLIANCE, &'static str);

// ── Payments ──────────────────────────────────────────────────────────────

pub const PAYMENTS: &str = r"\bpayments?\b|\bpay\b|\bpaid\b|\bcheckout\b|\bbilling\b|\bsubscriptions?\b|\bstripe\b|\bpaypal\b|\bpaymob\b|\bfawry\b|\bcredit cards?\b|\bdonations?\b|\bsell(?:ing)?\b|\bpurchase\b|دفع|شراء|اشتراك|فوترة|بطاقة ائتمان|تبرع|فوري";

pub static PAYMENT_RULE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(PAYMENTS).ok());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_patterns_compile() {
        assert_eq!(AUDIENCE_RULES.len(), AUDIENCE.len());
        assert_eq!(SITE_TYPE_RULES.len(), SITE_TYPES.len());
        assert_eq!(TONE_RULES.len(), TONES.len());
        assert_eq!(FEATURE_RULES.len(), FEATURES.len());
        assert_eq!(INDUSTRY_RULES.len(), INDUSTRIES.len());
        assert_eq!(REGION_RULES.len(), REGIONS.len());
        assert_eq!(LANGUAGE_RULES.len(), LANGUAGES.len());
        assert_eq!(CURRENCY_RULES.len(), CURRENCIES.len());
        assert_eq!(COMPLIANCE_RULES.len(), COMPLIANCE.len());
        assert!(PROJECT_MODE_RULE.is_some());
        assert!(PAYMENT_RULE.is_some());
    }

    #[test]
    fn site_type_order_is_fixed() {
        let order: Vec<SiteType> = SITE_TYPES.iter().map(|(t, _)| *t).collect();
        assert_eq!(
            order,
            vec![
                SiteType::Saas,
                SiteType::Ecommerce,
                SiteType::Portfolio,
                SiteType::Restaurant,
                SiteType::Blog,
                SiteType::Event,
                SiteType::Booking,
            ]
        );
    }

    #[test]
    fn arabic_keywords_match_with_attached_prefixes() {
        let text = "متجر إلكتروني للأزياء في مصر مع سلة وشراء ودفع";
        assert!(PAYMENT_RULE.as_ref().is_some_and(|r| r.is_match(text)));
        assert!(REGION_RULES.iter().any(|r| r.label == "Egypt" && r.is_match(text)));
    }

    #[test]
    fn currency_priority_prefers_regional() {
        let text = "prices in dollars for dubai customers";
        let first = CURRENCY_RULES.iter().find(|r| r.is_match(text)).map(|r| r.label);
        assert_eq!(first, Some("AED"));
    }
}
