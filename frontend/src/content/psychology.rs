use super::{Feature, PageContent, PanelDescriptor, RepeatPolicy, Stat, TeamMember, Tone};
use crate::navigation::NavTarget;
use crate::Route;

// Cards on this page close on a second tap; the CTA button is the only way out.
pub static PAGE: PageContent = PageContent {
    slug: "psicologia",
    route: Route::Psychology,
    nav_label: "Psicologia",
    accent: "#457b9d",
    hero_kicker: "Psicologia Vivace",
    hero_title: "Espaço para",
    hero_words: &["sentir", "entender", "mudar"],
    hero_text: "Psicoterapia para todas as idades, avaliação psicológica e grupos terapêuticos, presencial ou online.",
    hero_image: "/assets/psico-hero.webp",
    panels_heading: "Como podemos ajudar",
    panels_intro: "Toque para abrir; toque de novo para fechar.",
    panels: &[
        PanelDescriptor {
            id: "infantil",
            icon: "🎨",
            title: "Psicoterapia infantil",
            subtitle: "Ludoterapia e orientação de pais",
            body: "A criança se expressa brincando. Sessões semanais com devolutivas periódicas para os responsáveis.",
            features: &[
                Feature { id: "ludo", title: "Ludoterapia", description: "Brincar como linguagem terapêutica.", tone: Tone::Sun },
                Feature { id: "emocoes", title: "Regulação emocional", description: "Nomear e lidar com o que sente.", tone: Tone::Coral },
            ],
            stats: &[],
            cta: "Falar com a recepção",
            target: NavTarget::Href("index.html#contato"),
        },
        PanelDescriptor {
            id: "adulto",
            icon: "🌿",
            title: "Adolescentes e adultos",
            subtitle: "Ansiedade, humor e relações",
            body: "Terapia cognitivo-comportamental, terapia de aceitação e compromisso e terapia do esquema.",
            features: &[
                Feature { id: "ansiedade", title: "Ansiedade", description: "Protocolos com exposição gradual.", tone: Tone::Sky },
                Feature { id: "online", title: "Atendimento online", description: "Plataforma segura e horários estendidos.", tone: Tone::Teal },
            ],
            stats: &[Stat { value: "50 min", label: "por sessão" }],
            cta: "Falar com a recepção",
            target: NavTarget::Href("index.html#contato"),
        },
        PanelDescriptor {
            id: "avaliacao",
            icon: "📋",
            title: "Avaliação neuropsicológica",
            subtitle: "Atenção, memória e funções executivas",
            body: "Bateria de testes padronizados, entrevista com a família e laudo detalhado com recomendações.",
            features: &[
                Feature { id: "tdah", title: "TDAH", description: "Investigação com múltiplos informantes.", tone: Tone::Lilac },
                Feature { id: "laudo", title: "Laudo e devolutiva", description: "Documento completo e reunião explicativa.", tone: Tone::Teal },
            ],
            stats: &[
                Stat { value: "6", label: "sessões em média" },
                Stat { value: "30 dias", label: "para entrega do laudo" },
            ],
            cta: "Ver psicopedagogia",
            target: NavTarget::Route(Route::Psychopedagogy),
        },
    ],
    repeat: RepeatPolicy::Toggle,
    team_heading: "Psicólogas e psicólogos",
    team: &[
        TeamMember {
            name: "Dra. Helena Prado",
            role: "Psicóloga",
            registry: "CRP 06/84512",
            bio: "Terapia cognitivo-comportamental infantil e orientação parental.",
            photo: "/assets/equipe/helena.webp",
        },
        TeamMember {
            name: "André Figueira",
            role: "Neuropsicólogo",
            registry: "CRP 06/99120",
            bio: "Avaliação neuropsicológica de crianças e adultos.",
            photo: "/assets/equipe/andre.webp",
        },
        TeamMember {
            name: "Camila Rocha",
            role: "Psicóloga",
            registry: "CRP 06/110245",
            bio: "Adolescentes e adultos, com foco em ansiedade e humor.",
            photo: "/assets/equipe/camila.webp",
        },
    ],
    closing_title: "Dê o primeiro passo",
    closing_text: "A triagem é gratuita e ajuda a indicar o profissional mais adequado.",
};
