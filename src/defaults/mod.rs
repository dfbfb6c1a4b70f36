//! Per-site-type default tables and the fixed baselines every brief starts from.
//!
//! Everything here is canonical English; [`crate::i18n`] owns the Arabic side.

use crate::model::{contains, SiteType};

// ============================================================================
// FALLBACKS
// ============================================================================

pub const FALLBACK_AUDIENCE: &str = "Prospective customers and early adopters";
pub const FALLBACK_TONE: &[&str] = &["friendly", "confident", "concise"];
pub const FALLBACK_INDUSTRY: &str = "General";
pub const FALLBACK_REGION: &str = "Global";
pub const FALLBACK_LANGUAGE: &str = "English";
pub const FALLBACK_CURRENCY: &str = "USD";

pub const ARABIC: &str = "Arabic";
pub const CHECKOUT_FEATURE: &str = "Shopping cart & checkout";
pub const BLOG_FEATURE: &str = "Blog";
pub const BLOG_PAGE: &str = "Blog";

// ============================================================================
// SITE STRUCTURE
// ============================================================================

/// Ordered landing-page sections suggested for each site type.
pub fn sections(site: SiteType) -> &'static [&'static str] {
    match site {
        SiteType::Saas => &[
            "Hero with value proposition",
            "Social proof and customer logos",
            "Key features",
            "How it works",
            "Pricing",
            "Testimonials",
            "FAQ",
            "Final call to action",
            "Footer",
        ],
        SiteType::Ecommerce => &[
            "Hero with featured collection",
            "Featured categories",
            "Best sellers",
            "Promotions",
            "Customer reviews",
            "Shipping and returns",
            "Newsletter signup",
            "Footer",
        ],
        SiteType::Portfolio => &[
            "Hero introduction",
            "Selected work",
            "Case studies",
            "About me",
            "Services",
            "Testimonials",
            "Contact",
            "Footer",
        ],
        SiteType::Restaurant => &[
            "Hero with signature dish",
            "Menu highlights",
            "About the kitchen",
            "Reservations",
            "Gallery",
            "Location and opening hours",
            "Customer reviews",
            "Footer",
        ],
        SiteType::Blog => &[
            "Featured post",
            "Latest articles",
            "Categories",
            "About the author",
            "Newsletter signup",
            "Footer",
        ],
        SiteType::Event => &[
            "Hero with date and venue",
            "About the event",
            "Speakers",
            "Agenda",
            "Tickets",
            "Venue and travel",
            "Sponsors",
            "FAQ",
            "Footer",
        ],
        SiteType::Booking => &[
            "Hero with booking call to action",
            "Services",
            "How booking works",
            "Availability",
            "Pricing",
            "Testimonials",
            "FAQ",
            "Contact",
            "Footer",
        ],
        SiteType::Generic => &[
            "Hero",
            "About",
            "Services",
            "Benefits",
            "Testimonials",
            "FAQ",
            "Contact",
            "Footer",
        ],
    }
}

pub fn features(site: SiteType) -> &'static [&'static str] {
    match site {
        SiteType::Saas => &[
            "Pricing with clear plan comparison",
            "Free trial or demo signup",
            "Integrations",
            "FAQ",
        ],
        SiteType::Ecommerce => &[
            "Product catalog with filters",
            CHECKOUT_FEATURE,
            "Secure payments",
            "Order tracking",
        ],
        SiteType::Portfolio => &["Project gallery", "Case studies", "Contact form"],
        SiteType::Restaurant => &["Online menu", "Table reservations", "Map & location"],
        SiteType::Blog => &[BLOG_FEATURE, "Categories & tags", "Newsletter signup", "Search & filtering"],
        SiteType::Event => &[
            "Event schedule / calendar",
            "Speaker profiles",
            "Ticketing & registration",
            "Map & location",
        ],
        SiteType::Booking => &[
            "Online booking & scheduling",
            "Service catalog",
            "Automated reminders",
            "Contact form",
        ],
        SiteType::Generic => &["Contact form", "About & team", "Testimonials"],
    }
}

pub fn pages(site: SiteType) -> &'static [&'static str] {
    match site {
        SiteType::Saas => &["Home", "Features", "Pricing", "Integrations", "About", "Contact", "Login", "Sign up"],
        SiteType::Ecommerce => &["Home", "Shop", "Product details", "Cart", "About", "Contact", "Account"],
        SiteType::Portfolio => &["Home", "Work", "Case study", "About", "Contact"],
        SiteType::Restaurant => &["Home", "Menu", "Reservations", "Gallery", "About", "Contact"],
        SiteType::Blog => &["Home", BLOG_PAGE, "Article details", "Categories", "About", "Contact"],
        SiteType::Event => &["Home", "Agenda", "Speakers", "Tickets", "Venue", "FAQ", "Contact"],
        SiteType::Booking => &["Home", "Services", "Book now", "Pricing", "About", "Contact"],
        SiteType::Generic => &["Home", "About", "Services", "Contact"],
    }
}

/// Subscription products bill; everything else checks out.
pub fn payments_page(site: SiteType) -> &'static str {
    match site {
        SiteType::Saas => "Billing",
        _ => "Checkout",
    }
}

// ============================================================================
// BLUEPRINT LISTS
// ============================================================================

pub const BASE_USER_STORIES: &[&str] = &[
    "As a visitor, I can understand what the site offers within five seconds of landing.",
    "As a visitor, I can reach the team from any page.",
    "As a mobile user, I can navigate and complete key actions comfortably on my phone.",
];

pub const PAYMENT_USER_STORY: &str =
    "As a customer, I can pay securely using my preferred payment method.";
pub const ARABIC_USER_STORY: &str =
    "As an Arabic-speaking visitor, I can switch the site to Arabic with a right-to-left layout.";

pub fn user_stories(site: SiteType) -> &'static [&'static str] {
    match site {
        SiteType::Saas => &[
            "As a prospect, I can compare plans and start a free trial.",
            "As a user, I can sign up and log in securely.",
            "As a user, I can see my activity on a dashboard.",
        ],
        SiteType::Ecommerce => &[
            "As a shopper, I can browse and filter products by category and price.",
            "As a shopper, I can add items to my cart and check out quickly.",
            "As a shopper, I can track my order status.",
        ],
        SiteType::Portfolio => &[
            "As a potential client, I can browse selected projects and case studies.",
            "As a recruiter, I can download a resume or contact the owner.",
        ],
        SiteType::Restaurant => &[
            "As a diner, I can view the menu with prices.",
            "As a diner, I can reserve a table online.",
            "As a diner, I can find the location and opening hours.",
        ],
        SiteType::Blog => &[
            "As a reader, I can browse articles by category.",
            "As a reader, I can subscribe to the newsletter.",
            "As a reader, I can search past posts.",
        ],
        SiteType::Event => &[
            "As an attendee, I can see the agenda and speakers.",
            "As an attendee, I can buy tickets or register online.",
            "As an attendee, I can find venue and travel details.",
        ],
        SiteType::Booking => &[
            "As a customer, I can see available time slots and book an appointment.",
            "As a customer, I receive confirmation and reminder messages.",
            "As a customer, I can reschedule or cancel a booking.",
        ],
        SiteType::Generic => &[
            "As a visitor, I can learn about the services offered.",
            "As a visitor, I can read testimonials from other customers.",
        ],
    }
}

pub const BASE_KPIS: &[&str] = &[
    "Conversion rate of the primary call to action",
    "Bounce rate below 50%",
    "Average page load time under 2.5 seconds",
];

pub const PAYMENT_KPI: &str = "Payment success rate";

pub fn kpis(site: SiteType) -> &'static [&'static str] {
    match site {
        SiteType::Saas => &["Trial signups per week", "Trial-to-paid conversion rate"],
        SiteType::Ecommerce => &["Average order value", "Cart abandonment rate", "Repeat purchase rate"],
        SiteType::Portfolio => &["Inquiries per month", "Case study views"],
        SiteType::Restaurant => &["Online reservations per week", "Menu page views"],
        SiteType::Blog => &["Newsletter subscribers", "Average time on article", "Returning readers"],
        SiteType::Event => &["Tickets sold or registrations", "Registration conversion rate"],
        SiteType::Booking => &["Bookings per week", "No-show rate"],
        SiteType::Generic => &["Contact form submissions", "Returning visitors"],
    }
}

pub const BASE_CONTENT_CHECKLIST: &[&str] = &[
    "Logo and brand colors",
    "Headline and value proposition copy",
    "High-quality images or illustrations",
    "Contact details and social links",
    "Privacy policy and terms",
];

pub const ARABIC_CONTENT_ITEM: &str = "Arabic translations of all copy";
pub const COMPLIANCE_CONTENT_ITEM: &str = "Compliance texts (cookie banner, consent forms)";

pub fn content_checklist(site: SiteType) -> &'static [&'static str] {
    match site {
        SiteType::Saas => &[
            "Product screenshots or demo video",
            "Plan names, prices and limits",
            "Customer logos and testimonials",
        ],
        SiteType::Ecommerce => &[
            "Product photos, descriptions and prices",
            "Shipping and returns policy",
            "Size or specification guides",
        ],
        SiteType::Portfolio => &["Project images and descriptions", "Short bio and headshot", "Resume (PDF)"],
        SiteType::Restaurant => &["Full menu with prices", "Food and interior photos", "Opening hours and address"],
        SiteType::Blog => &["At least five launch articles", "Author bio and photo", "Category list"],
        SiteType::Event => &["Event date, venue and agenda", "Speaker bios and photos", "Ticket tiers and prices"],
        SiteType::Booking => &["Service list with durations and prices", "Staff bios", "Cancellation policy"],
        SiteType::Generic => &["Service descriptions", "Team photos and bios"],
    }
}

pub const BASE_MILESTONES: &[&str] = &[
    "Week 1: Discovery, sitemap and content plan",
    "Week 2: Wireframes and visual design",
    "Weeks 3-4: Build core pages and features",
    "Week 5: Content entry, QA and accessibility checks",
    "Week 6: Launch and analytics setup",
];

pub fn milestones(site: SiteType) -> &'static [&'static str] {
    match site {
        SiteType::Saas => &["Billing and onboarding flows"],
        SiteType::Ecommerce => &["Product import and payment setup"],
        SiteType::Portfolio => &["Case study write-ups"],
        SiteType::Restaurant => &["Menu and reservations integration"],
        SiteType::Blog => &["Editorial calendar and first articles"],
        SiteType::Event => &["Ticketing setup and speaker content"],
        SiteType::Booking => &["Calendar and reminder integration"],
        SiteType::Generic => &[],
    }
}

pub const BASE_PERSONAS: &[&str] = &["First-time visitor browsing on mobile"];
pub const ARABIC_PERSONA: &str = "Arabic-speaking visitor who prefers right-to-left content";

pub fn personas(site: SiteType) -> &'static [&'static str] {
    match site {
        SiteType::Saas => &["Team lead evaluating tools", "Founder looking for a quick setup"],
        SiteType::Ecommerce => &["Deal-seeking shopper", "Loyal repeat customer"],
        SiteType::Portfolio => &["Client looking to hire", "Recruiter screening candidates"],
        SiteType::Restaurant => &["Local diner planning an evening out", "Tourist searching nearby"],
        SiteType::Blog => &["Curious reader from search", "Loyal subscriber"],
        SiteType::Event => &["Attendee comparing events", "Sponsor evaluating reach"],
        SiteType::Booking => &["Busy customer booking on the go", "Returning client rebooking"],
        SiteType::Generic => &["Visitor comparing providers"],
    }
}

pub const BASE_QUESTIONS: &[&str] = &[
    "What is the single most important action a visitor should take?",
    "Do you have existing branding (logo, colors, fonts)?",
    "Who will maintain the content after launch?",
    "What is the target launch date and budget range?",
];

pub const PAYMENT_QUESTION: &str =
    "Which payment providers do you prefer (e.g., Stripe, PayPal, local gateways)?";
pub const ARABIC_QUESTION: &str = "Should Arabic be the default language, or offered as a toggle?";
pub const COMPLIANCE_QUESTION: &str =
    "Which regulations must you comply with, and who signs off on legal copy?";

pub fn site_question(site: SiteType) -> Option<&'static str> {
    match site {
        SiteType::Saas => Some("Do you offer a free trial, a freemium plan, or demos only?"),
        SiteType::Ecommerce => Some("How many products will you launch with, and do you need inventory sync?"),
        SiteType::Portfolio => Some("Which projects best represent the work you want more of?"),
        SiteType::Restaurant => Some("Do you need online ordering or only reservations?"),
        SiteType::Blog => Some("How often will new articles be published?"),
        SiteType::Event => Some("Is this a one-time event or a recurring series?"),
        SiteType::Booking => Some("Do you need staff-specific calendars or a single shared calendar?"),
        SiteType::Generic => None,
    }
}

// ============================================================================
// TECH & NON-FUNCTIONAL
// ============================================================================

pub const BASE_TECH: &[&str] = &[
    "Next.js with TypeScript",
    "Tailwind CSS",
    "Headless CMS (e.g., Sanity or Strapi)",
    "Vercel or Netlify hosting",
    "Privacy-friendly analytics (e.g., Plausible)",
];

pub const I18N_TECH: &str = "next-intl or i18next with RTL support";
pub const BLOG_TECH: &str = "MDX or CMS-backed blog with RSS feed";

const EGYPT_GATEWAY: &str = "Paymob or Fawry for local payments";
const GULF_GATEWAY: &str = "Tap Payments or HyperPay for Gulf payments";
const GLOBAL_GATEWAY: &str = "Stripe for payments and subscriptions";

const GULF_REGIONS: &[&str] = &[
    "Saudi Arabia",
    "United Arab Emirates",
    "Qatar",
    "Kuwait",
    "Middle East & GCC",
];

pub fn payment_gateway(regions: &[String]) -> &'static str {
    if contains(regions, "Egypt") {
        EGYPT_GATEWAY
    } else if GULF_REGIONS.iter().any(|g| contains(regions, g)) {
        GULF_GATEWAY
    } else {
        GLOBAL_GATEWAY
    }
}

pub const NON_FUNCTIONAL: &[&str] = &[
    "Responsive, mobile-first layout",
    "Core Web Vitals: LCP under 2.5s and CLS under 0.1",
    "WCAG 2.1 AA accessibility",
    "SEO basics: semantic HTML, meta tags, sitemap.xml and Open Graph",
    "Security: HTTPS, secure headers and spam protection on forms",
];

pub const RTL_REQUIREMENT: &str = "Full RTL layout with Arabic typography (e.g., Cairo or Tajawal fonts)";
