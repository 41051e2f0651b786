// src/content.rs
// Fixed copy, links and image names baked into the page.

use crate::components::icons::Glyph;

pub const BRAND_LEAD: &str = "Tradução da ";
pub const BRAND_ACCENT: &str = "Bíblia";

pub const PIX_KEY: &str = "4301947894";
pub const ACCOUNT_HOLDER: &str = "Marcelo Alonso Junior";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Informativo,
    Sobre,
    Participe,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Informativo, Section::Sobre, Section::Participe];

    pub const fn id(self) -> &'static str {
        match self {
            Section::Informativo => "informativo",
            Section::Sobre => "sobre",
            Section::Participe => "participe",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Section::Informativo => "Informativo",
            Section::Sobre => "Sobre",
            Section::Participe => "Participe",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

const IMAGE_DIR: &str = "img";

/// Field photos, referenced by what they show rather than by camera file name.
/// All ten photos shipped in `img/` get a key. Only four are placed on the page
/// (hero, soccer, kids, portrait); the other six are not referenced yet.
#[allow(dead_code)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageKey {
    HeroGroup,
    WoodPanel,
    Canoe,
    Totem,
    Shell,
    Volcano,
    KidsFruit,
    Soccer,
    VolcanoSmoke,
    ExtraLandscape,
}

impl ImageKey {
    #[cfg(test)]
    pub const ALL: [ImageKey; 10] = [
        ImageKey::HeroGroup,
        ImageKey::WoodPanel,
        ImageKey::Canoe,
        ImageKey::Totem,
        ImageKey::Shell,
        ImageKey::Volcano,
        ImageKey::KidsFruit,
        ImageKey::Soccer,
        ImageKey::VolcanoSmoke,
        ImageKey::ExtraLandscape,
    ];

    pub const fn file_name(self) -> &'static str {
        match self {
            ImageKey::HeroGroup => "IMG_20251105_081705788_HDR_AE.jpg",
            ImageKey::WoodPanel => "IMG_20251128_115359746.jpg",
            ImageKey::Canoe => "IMG_20251128_115304906.jpg",
            ImageKey::Totem => "IMG_20251128_115212950.jpg",
            ImageKey::Shell => "IMG_20251128_115324611_HDR_AE.jpg",
            ImageKey::Volcano => "IMG_20251105_090023019.jpg",
            ImageKey::KidsFruit => "IMG_20251104_101548670.jpg",
            ImageKey::Soccer => "IMG_20251102_172913274_HDR.jpg",
            ImageKey::VolcanoSmoke => "IMG_20251105_085537762.jpg",
            ImageKey::ExtraLandscape => "IMG_20251128_115351283.jpg",
        }
    }

    /// Path relative to the page, as written into `<img src>`.
    pub fn src(self) -> String {
        format!("{IMAGE_DIR}/{}", self.file_name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub title: &'static str,
    pub href: &'static str,
    pub glyph: Glyph,
}

impl SocialLink {
    /// `mailto:` links stay in the current tab; everything else opens a new one.
    pub fn opens_new_tab(&self) -> bool {
        !self.href.starts_with("mailto:")
    }
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        label: "Instagram",
        title: "Siga no Instagram",
        href: "https://www.instagram.com/marcelo_alonsojr?igsh=YTdxYm4zeHVuanp0",
        glyph: Glyph::Instagram,
    },
    SocialLink {
        label: "Facebook",
        title: "Siga no Facebook",
        href: "https://www.facebook.com/share/1AT3Jjtjin/",
        glyph: Glyph::Facebook,
    },
    SocialLink {
        label: "WhatsApp",
        title: "Conversar no WhatsApp",
        href: "https://wa.me/5511958139868",
        glyph: Glyph::WhatsApp,
    },
    SocialLink {
        label: "Email",
        title: "Enviar um e-mail",
        href: "mailto:contato@exemplo.com",
        glyph: Glyph::Mail,
    },
];

pub const YEAR_GOALS: [&str; 4] = [
    "Concluir todas as revisões dos livros de Marcos, Tiago e Filemom",
    "Realizar a gravação final dos livros",
    "Publicar e distribuir as obras na tribo Kamaiura",
    "Fazer um curso de Hebraico para aprofundar conhecimento e qualidade na tradução",
];

pub const ACTIVITIES: [&str; 4] = [
    "Evangelismo em praças e feiras",
    "Visitas a casas de recuperação",
    "Workshops de capacitação",
    "Teatro e Dança",
];

/// One prayer request, rendered as `lead` + bold `emphasis` + `tail`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrayerRequest {
    pub lead: &'static str,
    pub emphasis: &'static str,
    pub tail: &'static str,
    pub highlighted: bool,
}

pub const PRAYER_REQUESTS: [PrayerRequest; 4] = [
    PrayerRequest {
        lead: "Pelo ",
        emphasis: "projeto de tradução",
        tail: " com os Kamaiuras.",
        highlighted: false,
    },
    PrayerRequest {
        lead: "Pela ",
        emphasis: "cobertura espiritual",
        tail: " da nossa base da Jocum.",
        highlighted: false,
    },
    PrayerRequest {
        lead: "Por ",
        emphasis: "questões financeiras",
        tail: " e provisão.",
        highlighted: false,
    },
    PrayerRequest {
        lead: "Pelo meu ",
        emphasis: "casamento com a Thais",
        tail: ". Estamos a sete meses da cerimônia e precisamos de discernimento para os próximos passos e mentores para nos acompanhar.",
        highlighted: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn section_anchors_match_ids() {
        let hrefs: Vec<String> = Section::ALL.iter().map(|s| s.href()).collect();
        assert_eq!(hrefs, ["#informativo", "#sobre", "#participe"]);
    }

    #[test]
    fn every_image_has_its_own_file() {
        let names: HashSet<&str> = ImageKey::ALL.iter().map(|k| k.file_name()).collect();
        assert_eq!(names.len(), ImageKey::ALL.len());
        assert_eq!(
            ImageKey::HeroGroup.src(),
            "img/IMG_20251105_081705788_HDR_AE.jpg"
        );
    }

    #[test]
    fn only_mail_link_stays_in_tab() {
        let same_tab: Vec<&str> = SOCIAL_LINKS
            .iter()
            .filter(|l| !l.opens_new_tab())
            .map(|l| l.label)
            .collect();
        assert_eq!(same_tab, ["Email"]);
        assert!(SOCIAL_LINKS
            .iter()
            .filter(|l| l.opens_new_tab())
            .all(|l| l.href.starts_with("https://")));
    }

    #[test]
    fn last_prayer_request_is_highlighted() {
        let flagged: Vec<bool> = PRAYER_REQUESTS.iter().map(|p| p.highlighted).collect();
        assert_eq!(flagged, [false, false, false, true]);
    }
}
