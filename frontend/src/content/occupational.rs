use super::{Feature, PageContent, PanelDescriptor, RepeatPolicy, Stat, TeamMember, Tone};
use crate::navigation::NavTarget;
use crate::Route;

pub static PAGE: PageContent = PageContent {
    slug: "terapia-ocupacional",
    route: Route::Occupational,
    nav_label: "Terapia Ocupacional",
    accent: "#f4a261",
    hero_kicker: "Terapia Ocupacional Vivace",
    hero_title: "Autonomia para",
    hero_words: &["brincar", "estudar", "viver"],
    hero_text: "Integração sensorial, coordenação motora e atividades de vida diária com salas preparadas para cada fase do desenvolvimento.",
    hero_image: "/assets/to-hero.webp",
    panels_heading: "Programas de terapia ocupacional",
    panels_intro: "Toque para ver detalhes e toque de novo para seguir.",
    panels: &[
        PanelDescriptor {
            id: "integracao",
            icon: "🤸",
            title: "Integração sensorial",
            subtitle: "Abordagem de Ayres",
            body: "Avaliação do processamento sensorial e intervenção em sala equipada para modulação, práxis e postura.",
            features: &[
                Feature { id: "modulacao", title: "Modulação sensorial", description: "Hiper e hiporreatividade a sons, texturas e movimento.", tone: Tone::Teal },
                Feature { id: "praxis", title: "Práxis", description: "Planejar e executar ações motoras novas.", tone: Tone::Sun },
            ],
            stats: &[Stat { value: "240 m²", label: "de salas sensoriais" }],
            cta: "Conhecer o Instituto Incluir",
            target: NavTarget::Href("instituto.html"),
        },
        PanelDescriptor {
            id: "motora",
            icon: "✏️",
            title: "Coordenação motora fina",
            subtitle: "Escrita, recorte e uso de talheres",
            body: "Treino de preensão, grafomotricidade e destreza manual com adaptações para a sala de aula.",
            features: &[
                Feature { id: "grafo", title: "Grafomotricidade", description: "Traçado, pressão e postura para escrever.", tone: Tone::Coral },
                Feature { id: "adaptacoes", title: "Adaptações escolares", description: "Engrossadores, pranchas inclinadas e tesouras adaptadas.", tone: Tone::Sky },
            ],
            stats: &[],
            cta: "Ver psicopedagogia",
            target: NavTarget::Href("psicopedagogia.html"),
        },
        PanelDescriptor {
            id: "rotina",
            icon: "🏠",
            title: "Atividades de vida diária",
            subtitle: "Independência em casa",
            body: "Vestir-se, higiene, alimentação e organização do tempo, trabalhados com a família.",
            features: &[
                Feature { id: "visual", title: "Rotinas visuais", description: "Quadros e sequências personalizadas.", tone: Tone::Lilac },
                Feature { id: "alimentacao", title: "Alimentação", description: "Seletividade alimentar em parceria com o Programa Nutrir.", tone: Tone::Sun },
            ],
            stats: &[],
            cta: "Conhecer o Programa Nutrir",
            target: NavTarget::Href("./nutrir.html"),
        },
    ],
    repeat: RepeatPolicy::Navigate,
    team_heading: "Terapeutas ocupacionais",
    team: &[
        TeamMember {
            name: "Marcos Tavares",
            role: "Terapeuta ocupacional coordenador",
            registry: "CREFITO 3/12345-TO",
            bio: "Certificado em integração sensorial, supervisiona a equipe infantil.",
            photo: "/assets/equipe/marcos.webp",
        },
        TeamMember {
            name: "Beatriz Moura",
            role: "Terapeuta ocupacional",
            registry: "CREFITO 3/15872-TO",
            bio: "Atividades de vida diária e tecnologia assistiva.",
            photo: "/assets/equipe/beatriz.webp",
        },
    ],
    closing_title: "Visite nossas salas",
    closing_text: "Agende uma visita guiada às salas sensoriais antes de iniciar a avaliação.",
};
