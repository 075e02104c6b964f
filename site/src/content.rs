//! Page copy and static data.
//!
//! Single source of truth for every string the landing page shows. Brand
//! name and hero image live in [`crate::config::SiteConfig`] instead, since
//! the host page may override them.

use crate::tabs::{TabDefinition, TabId};
use crate::types::{CodeSample, Glyph, InferenceMode, PricingRow, PricingTable, Reason};

pub const NAV_CTA: &str = "Start building";

pub const HERO_TITLE_LINES: [&str; 3] = ["Large scale", "inference at small", "scale cost"];
pub const HERO_SUBTITLE: &str = "The developer platform that revolutionizes inference at scale";
pub const HERO_CTA: &str = "Get started";

pub const BANNER: &str = "Built for developers by developers";

pub const RATE_LIMITS_TITLE: &str = "We hate rate limits, too.";
pub const RATE_LIMITS_BODY: &str = "If you're investing in a premium service, it should unlock faster growth for you, not slow you down with unexpected limits and hidden fees.";
pub const RATE_LIMITS_KICKER: &str = "It's time for a smarter solution.";

pub const ADAPTIVE_EYEBROW: &str = "Introducing";
pub const ADAPTIVE_TITLE: &str = "Adaptive Inference";

pub const INFERENCE_MODES: [InferenceMode; 3] = [
    InferenceMode {
        glyph: Glyph::Lightning,
        title: "Real-time",
        description: "Sub-second latency for live demands",
    },
    InferenceMode {
        glyph: Glyph::Clock,
        title: "Asynchronous",
        description: "Low-cost for flexible timing, one-off requests",
    },
    InferenceMode {
        glyph: Glyph::Database,
        title: "Batch",
        description: "Low-cost for high-volume, bulk processing",
    },
];

/// Tab shown first in the code selector unless configuration says otherwise.
pub const DEFAULT_CODE_TAB: TabId = TabId::from_static("real-time");

pub const CODE_SAMPLES: [CodeSample; 3] = [
    CodeSample {
        id: "real-time",
        code: r#"from openai import OpenAI
# OpenAI compatible API
client = OpenAI(
    base_url="https://api.acloudapp.ai/v1",
    api_key="my_acloudapp_api_key"
)
response = client.chat.completions.create(
    model="acloudapp/Meta-Llama-3.1-405B-Instruct-Turbo",
    messages=[
        {
            "role": "user",
            "content": "Provide an analysis of market trends in AI."
        }
    ]
)
print(response.choices[0].message.content)"#,
    },
    CodeSample {
        id: "async",
        code: r#"from openai import OpenAI
# OpenAI compatible API
client = OpenAI(
    base_url="https://api.acloudapp.ai/v1",
    api_key="my_acloudapp_api_key"
)
response = client.chat.completions.create(
    model="acloudapp/Meta-Llama-3.1-405B-Instruct-Turbo",
    messages=[{"role": "user", "content": "Analyze market trends."}],
    metadata={
        "@acloudapp.ai": {
            "callback_url": "https://my-webhook-receiver/callback",
            "async": True,
            "completion_window": "24h"
        }
    }
)"#,
    },
    CodeSample {
        id: "batch",
        code: r#"from openai import OpenAI
# OpenAI compatible API
client = OpenAI(
    base_url="https://api.acloudapp.ai/v1",
    api_key="your_acloudapp_api_key"
)
# Upload LLM requests
batch_input_file = client.files.create(
    file=open("batch_llm_requests.json", "rb"),
    purpose="batch"
)
# Start adaptive inference
batch_request = client.batches.create(
    input_file_id=batch_input_file.id,
    endpoint="v1/chat/completions",
    completion_window="24h"
)"#,
    },
];

/// Tab definitions for the code selector, in display order.
pub fn code_tab_definitions() -> Vec<TabDefinition<&'static str>> {
    CODE_SAMPLES
        .iter()
        .map(|sample| TabDefinition::new(sample.id, sample.code))
        .collect()
}

pub const MODELS_TITLE_LINES: [&str; 2] = ["LLAMA 3.3, LLAMA 3.1, and", "DEEPSEEK-R1 MODELS"];
pub const MODELS_CAPTION: &str = "Prices are per million input/output tokens";
pub const MODELS_FOOTNOTE: &str = "Same terms and restrictions may apply";

pub const PRICING: PricingTable = PricingTable {
    model_heading: "MODEL SIZE",
    windows: &[
        "Real time", "1 hour", "3 hours", "6 hours", "12 hours", "24 hours",
    ],
    rows: &[
        PricingRow {
            model: "8B",
            prices: &["$0.18", "$0.50", "$0.58", "$0.57", "$0.56", "$0.55"],
        },
        PricingRow {
            model: "70B",
            prices: &["$0.70", "$0.59", "$0.33", "$0.30", "$0.28", "$0.25"],
        },
        PricingRow {
            model: "40GB",
            prices: &["$3.50", "$0.75", "$0.60", "$0.45", "$0.00", "$0.59"],
        },
        PricingRow {
            model: "Deepseek-R1",
            prices: &["$2.00", "$1.00", "$0.50", "$0.30", "$0.70", "$0.80"],
        },
    ],
};

pub const WHY_TITLE: &str = "Why developers love";

pub const REASONS: [Reason; 3] = [
    Reason {
        glyph: Glyph::Gauge,
        title: "High volume by design",
        body: "Experience seamless scalability and best-in-class rate limits, ensuring uninterrupted performance.",
    },
    Reason {
        glyph: Glyph::Target,
        title: "Predictable completion windows",
        body: "Choose a timeframe that suits your needs\u{2014}whether it's an hour or a full day, we've got you covered.",
    },
    Reason {
        glyph: Glyph::Sparkle,
        title: "Unmatched value",
        body: "Achieve top-tier performance and reliability at half the cost of leading providers.",
    },
];

/// Footer copyright line for `brand`.
pub fn copyright(brand: &str) -> String {
    format!("\u{a9} 2025 {brand} technologies. All rights reserved.")
}
