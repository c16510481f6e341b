//! Built-in Dataset
//!
//! Starter plants and eco tips shipped with the app.

use crate::domain::PlantRecord;

/// (id, name, water, light, soil, companions, toxicity, tips, default_reminder_days)
type PlantRow = (&'static str, &'static str, &'static str, &'static str, &'static str, &'static str, &'static str, &'static str, u32);

const PLANTS: &[PlantRow] = &[
    (
        "basil",
        "Basil",
        "Keep evenly moist; water when top 1–2 cm of soil is dry. Avoid wetting leaves at night.",
        "Full sun (6–8h). Indoors: brightest south window or strong grow light.",
        "Rich, well-drained potting mix. Pinch tops to prevent bolting.",
        "Tomato, pepper; avoid rue.",
        "Non-toxic to pets and humans.",
        "Harvest often to promote bushiness. Remove flower spikes for best flavor.",
        2,
    ),
    (
        "snake",
        "Snake Plant (Sansevieria)",
        "Infrequent—let soil dry fully. Every 2–3 weeks; monthly in winter.",
        "Low to bright indirect; tolerates low light well.",
        "Cactus/succulent mix with excellent drainage.",
        "Great with other low-water succulents.",
        "Mildly toxic if chewed by pets.",
        "Use a pot with drainage. Overwatering is the #1 killer.",
        14,
    ),
    (
        "spider",
        "Spider Plant",
        "Keep slightly moist; water when top 2–3 cm is dry. Likes occasional misting.",
        "Bright, indirect. Avoid harsh midday sun.",
        "All-purpose potting mix with perlite for drainage.",
        "Pairs with ferns/peperomia in similar light.",
        "Non-toxic to pets.",
        "Trim brown tips; propagate babies (‘spiderettes’) in water.",
        5,
    ),
    (
        "pothos",
        "Pothos (Devil’s Ivy)",
        "When top 3–5 cm dry. Tolerates missed waterings.",
        "Low–bright indirect. Variegation fades in low light.",
        "Light, airy mix; don’t let sit in water.",
        "Great shelf/hanging companion plant.",
        "Toxic if ingested (oxalates).",
        "Rotate pot weekly for even growth; easy to propagate from cuttings.",
        7,
    ),
    (
        "peace-lily",
        "Peace Lily",
        "Keep consistently moist; droops when thirsty—water and it perks up.",
        "Medium, indirect; blooms with brighter light.",
        "Rich, moisture-retentive but draining mix.",
        "Pairs with calatheas/philodendrons.",
        "Toxic to pets if chewed.",
        "Wipe leaves to prevent dust; yellow leaves = overwater.",
        4,
    ),
];

const TIPS: &[&str] = &[
    "Collect cool tap water and let it sit overnight—chlorine dissipates and plants prefer room temp.",
    "Water early morning to reduce evaporation and fungal risk.",
    "Use a moisture meter or finger check to avoid overwatering.",
    "Group humidity-loving plants together to create a microclimate.",
    "Save coffee grounds for acid-lovers (azalea, blueberry) — use lightly and mix in soil.",
];

pub(super) fn plants() -> Vec<PlantRecord> {
    PLANTS
        .iter()
        .map(|&(id, name, water, light, soil, companions, toxicity, tips, days)| PlantRecord {
            id: id.to_string(),
            name: name.to_string(),
            water: water.to_string(),
            light: light.to_string(),
            soil: soil.to_string(),
            companions: companions.to_string(),
            toxicity: toxicity.to_string(),
            tips: tips.to_string(),
            default_reminder_days: days,
        })
        .collect()
}

pub(super) fn tips() -> Vec<String> {
    TIPS.iter().map(|t| t.to_string()).collect()
}
