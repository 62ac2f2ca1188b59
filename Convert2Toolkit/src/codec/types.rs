//! Structured data type tags

use std::fmt;

/// Region ids of documents that the game consumes in LSF form.
///
/// Resource banks reference generated meshes and textures by path, so they
/// are also the documents whose `Generated/` references get rewritten.
pub const LSF_TYPES: &[&str] = &[
    "AnimationBank",
    "AnimationBlueprintBank",
    "AnimationSetBank",
    "AtmosphereBank",
    "BlendSpaceBank",
    "CameraShakeBank",
    "CharacterVisualBank",
    "ClothColliderBank",
    "ColorListBank",
    "DialogBank",
    "DiffusionProfileBank",
    "EffectBank",
    "FCurveBank",
    "IKRigBank",
    "LightCookieBank",
    "LightingBank",
    "MaterialBank",
    "MaterialPresetBank",
    "MeshProxyBank",
    "PhysicsBank",
    "SkeletonBank",
    "SkeletonMirrorTableBank",
    "SkinPresetBank",
    "SoundBank",
    "TerrainBrushBank",
    "TextureBank",
    "TileSetBank",
    "TimelineBank",
    "TimelineSceneBank",
    "VirtualTextureBank",
    "VisualBank",
    "VoiceBank",
    "Templates",
];

/// Type of a structured file, as reported by a [`StructuredCodec`].
///
/// [`StructuredCodec`]: super::StructuredCodec
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    /// A region from [`LSF_TYPES`]
    Lsf(String),
    /// UI icon UV list (`IconUVList` region)
    IconUvList,
    /// UI texture atlas description (`TextureAtlasInfo` region)
    TextureAtlasInfo,
    /// Any other structured region
    Other(String),
    /// Not a structured document
    Unknown,
}

impl DataType {
    /// Classify a region id
    #[must_use]
    pub fn from_region(region: &str) -> Self {
        match region {
            "IconUVList" => Self::IconUvList,
            "TextureAtlasInfo" => Self::TextureAtlasInfo,
            _ if LSF_TYPES.contains(&region) => Self::Lsf(region.to_string()),
            "" => Self::Unknown,
            _ => Self::Other(region.to_string()),
        }
    }

    /// Whether this is one of the [`LSF_TYPES`]
    #[must_use]
    pub fn is_lsf(&self) -> bool {
        matches!(self, Self::Lsf(_))
    }

    /// Whether files of this type get their path references rewritten and
    /// are re-encoded after copying
    #[must_use]
    pub fn is_rewrite_target(&self) -> bool {
        matches!(self, Self::Lsf(_) | Self::IconUvList | Self::TextureAtlasInfo)
    }

    /// Region id, or `Unknown`
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Lsf(region) | Self::Other(region) => region,
            Self::IconUvList => "IconUVList",
            Self::TextureAtlasInfo => "TextureAtlasInfo",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
