use super::{Feature, PageContent, PanelDescriptor, RepeatPolicy, Stat, TeamMember, Tone};
use crate::navigation::NavTarget;
use crate::Route;

pub static PAGE: PageContent = PageContent {
    slug: "programa-nutrir",
    route: Route::Nutrir,
    nav_label: "Programa Nutrir",
    accent: "#52b788",
    hero_kicker: "Programa Nutrir",
    hero_title: "Uma relação mais leve com",
    hero_words: &["a comida", "o corpo", "você"],
    hero_text: "Tratamento interdisciplinar para transtornos alimentares, com psicologia, nutrição, psiquiatria e grupos de apoio para famílias.",
    hero_image: "/assets/nutrir-hero.webp",
    panels_heading: "Frentes do programa",
    panels_intro: "Toque para saber mais. Um segundo toque leva ao contato da equipe.",
    panels: &[
        PanelDescriptor {
            id: "ambulatorio",
            icon: "🩺",
            title: "Acompanhamento ambulatorial",
            subtitle: "Anorexia, bulimia e compulsão",
            body: "Consultas semanais com psicologia e nutrição, acompanhamento psiquiátrico e reunião de equipe para cada paciente.",
            features: &[
                Feature { id: "plano", title: "Plano alimentar flexível", description: "Construído em conjunto, sem dietas restritivas.", tone: Tone::Teal },
                Feature { id: "psiquiatria", title: "Psiquiatria", description: "Avaliação e manejo de comorbidades.", tone: Tone::Lilac },
                Feature { id: "reuniao", title: "Discussão de caso", description: "Equipe reunida toda semana.", tone: Tone::Sky },
            ],
            stats: &[
                Stat { value: "4", label: "especialidades por paciente" },
                Stat { value: "1x", label: "reunião de equipe por semana" },
            ],
            cta: "Falar com a equipe Nutrir",
            target: NavTarget::Href("https://wa.me/5511987654321?text=Quero%20saber%20sobre%20o%20Programa%20Nutrir"),
        },
        PanelDescriptor {
            id: "seletividade",
            icon: "🥕",
            title: "Seletividade alimentar infantil",
            subtitle: "Quando comer vira batalha",
            body: "Intervenção com terapia ocupacional, fonoaudiologia e nutrição para ampliar o repertório alimentar da criança.",
            features: &[
                Feature { id: "dessensibilizacao", title: "Dessensibilização", description: "Exploração gradual de texturas e sabores.", tone: Tone::Sun },
                Feature { id: "mesa", title: "Rotina à mesa", description: "Orientações práticas para as refeições em família.", tone: Tone::Coral },
            ],
            stats: &[],
            cta: "Ver terapia ocupacional",
            target: NavTarget::Href("terapia-ocupacional.html"),
        },
        PanelDescriptor {
            id: "familias",
            icon: "👨‍👩‍👧",
            title: "Grupo de famílias",
            subtitle: "Ninguém cuida sozinho",
            body: "Encontros quinzenais abertos a familiares de pacientes, com psicoeducação e troca de experiências.",
            features: &[
                Feature { id: "psicoeducacao", title: "Psicoeducação", description: "Entender o transtorno para ajudar melhor.", tone: Tone::Teal },
            ],
            stats: &[Stat { value: "quinzenal", label: "às quintas, 19h" }],
            cta: "Quero participar",
            target: NavTarget::Href("https://wa.me/5511987654321?text=Quero%20participar%20do%20grupo%20de%20fam%C3%ADlias"),
        },
    ],
    repeat: RepeatPolicy::Navigate,
    team_heading: "Equipe Nutrir",
    team: &[
        TeamMember {
            name: "Dra. Sofia Menezes",
            role: "Psiquiatra",
            registry: "CRM-SP 145872",
            bio: "Psiquiatra com formação em transtornos alimentares.",
            photo: "/assets/equipe/sofia.webp",
        },
        TeamMember {
            name: "Gabriel Nunes",
            role: "Nutricionista",
            registry: "CRN-3 45120",
            bio: "Nutrição comportamental e comer intuitivo.",
            photo: "/assets/equipe/gabriel.webp",
        },
        TeamMember {
            name: "Camila Rocha",
            role: "Psicóloga",
            registry: "CRP 06/110245",
            bio: "Terapia cognitivo-comportamental para transtornos alimentares.",
            photo: "/assets/equipe/camila.webp",
        },
    ],
    closing_title: "Acolhimento sem julgamento",
    closing_text: "O primeiro contato é feito por uma psicóloga da equipe, com sigilo garantido.",
};
