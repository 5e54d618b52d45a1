//! Business engine ("motor") tags and their display colors

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineTag {
    Aquisicao,
    Receita,
    Operacao,
    Retencao,
    Orquestracao,
    /// Any tag outside the fixed table
    Other,
}

impl EngineTag {
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or(EngineTag::Other)
    }

    /// Badge colors as `(background, foreground)`
    pub fn colors(&self) -> (&'static str, &'static str) {
        match self {
            EngineTag::Aquisicao => ("#dbeafe", "#1e40af"),
            EngineTag::Receita => ("#dcfce7", "#166534"),
            EngineTag::Operacao => ("#f3e8ff", "#6b21a8"),
            EngineTag::Retencao => ("#ffedd5", "#9a3412"),
            EngineTag::Orquestracao => ("#e0e7ff", "#3730a3"),
            EngineTag::Other => ("#f3f4f6", "#1f2937"),
        }
    }

    /// CSS class of the badge
    pub fn css_class(&self) -> &'static str {
        match self {
            EngineTag::Aquisicao => "motor-aquisicao",
            EngineTag::Receita => "motor-receita",
            EngineTag::Operacao => "motor-operacao",
            EngineTag::Retencao => "motor-retencao",
            EngineTag::Orquestracao => "motor-orquestracao",
            EngineTag::Other => "motor-neutro",
        }
    }

    pub const ALL: [EngineTag; 6] = [
        EngineTag::Aquisicao,
        EngineTag::Receita,
        EngineTag::Operacao,
        EngineTag::Retencao,
        EngineTag::Orquestracao,
        EngineTag::Other,
    ];
}

impl std::fmt::Display for EngineTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineTag::Aquisicao => write!(f, "aquisicao"),
            EngineTag::Receita => write!(f, "receita"),
            EngineTag::Operacao => write!(f, "operacao"),
            EngineTag::Retencao => write!(f, "retencao"),
            EngineTag::Orquestracao => write!(f, "orquestracao"),
            EngineTag::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for EngineTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aquisicao" => Ok(EngineTag::Aquisicao),
            "receita" => Ok(EngineTag::Receita),
            "operacao" => Ok(EngineTag::Operacao),
            "retencao" => Ok(EngineTag::Retencao),
            "orquestracao" => Ok(EngineTag::Orquestracao),
            _ => Err(format!("Unknown engine tag: {}", s)),
        }
    }
}
