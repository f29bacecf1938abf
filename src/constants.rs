/// Page selectors and wiring-level tuning.
///
/// Ids and classes mirror the signup page markup; tunables that belong to a
/// single pure module live next to that module instead.
// Particle backdrop
pub const PARTICLES_CANVAS_ID: &str = "particles-canvas";

// Accent color shared by particles and links
pub const ACCENT_RGB: &str = "255, 221, 53";
pub const PARTICLE_FILL: &str = "rgba(255, 221, 53, 0.3)";
pub const LINK_WIDTH_PX: f64 = 0.5;

// Tilt cards
pub const TILT_CARD_SELECTOR: &str = ".strategy-card[data-tilt]";
pub const GLARE_SELECTOR: &str = ".card-glare";
pub const CARD_INDEX_ATTR: &str = "data-index";
pub const TILT_STAGGER_STEP_SEC: f32 = 0.1;

// Reveal targets and the counters they may contain
pub const CARD_REVEAL_SELECTOR: &str = ".strategy-card";
pub const HEADER_REVEAL_SELECTOR: &str = ".section-header";
pub const CARD_REVEAL_THRESHOLD: f32 = 0.15;
pub const HEADER_REVEAL_THRESHOLD: f32 = 0.2;
pub const COUNTER_ATTR: &str = "data-counter";
pub const COUNTER_SELECTOR: &str = "[data-counter]";
pub const REVEAL_SLOT_ATTR: &str = "data-reveal-slot";
pub const REVEAL_HIDDEN_OFFSET_PX: f32 = 30.0;
pub const REVEAL_TRANSITION: &str = "opacity 0.8s ease-out, transform 0.8s ease-out";

// Parallax
pub const PARALLAX_SELECTOR: &str = ".parallax";
pub const PARALLAX_SPEED: f32 = 0.5;

// Magnetic buttons
pub const MAGNET_SELECTOR: &str = ".btn-interface";
pub const MAGNET_STRENGTH: f32 = 20.0;

// Signup form fields
pub const NUMERIC_INPUT_IDS: [&str; 2] = ["agencia", "conta"];
pub const CPF_INPUT_ID: &str = "cpf";
pub const ACCOUNT_SELECT_ID: &str = "select-tipo-conta";
pub const BUSINESS_INPUTS_ID: &str = "pj-inputs";
pub const INDIVIDUAL_INPUTS_ID: &str = "pf-inputs";

// Custom dropdown
pub const DROPDOWN_SELECTOR: &str = ".custom-select";
pub const DROPDOWN_TRIGGER_SELECTOR: &str = ".select-trigger";
pub const DROPDOWN_OPTION_SELECTOR: &str = ".option";
pub const DROPDOWN_VALUE_ID: &str = "custom-select-value";
pub const DROPDOWN_OPEN_CLASS: &str = "open";
pub const DROPDOWN_SELECTED_CLASS: &str = "selected";
pub const DROPDOWN_VALUE_ATTR: &str = "data-value";

// Header and sub-header navigation
pub const MOBILE_MENU_BTN_SELECTOR: &str = ".mobile-menu-btn";
pub const HEADER_ACTIONS_SELECTOR: &str = ".header-actions";
pub const ACTIVE_CLASS: &str = "active";
pub const NAV_MENU_SELECTOR: &str = ".sub-header-menu";
pub const NAV_LEFT_ARROW_SELECTOR: &str = ".left-arrow";
pub const NAV_RIGHT_ARROW_SELECTOR: &str = ".right-arrow";
pub const NAV_VISIBLE_CLASS: &str = "visible";
pub const NAV_SCROLL_STEP_PX: f64 = 150.0;
