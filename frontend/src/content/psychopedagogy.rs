use super::{Feature, PageContent, PanelDescriptor, RepeatPolicy, Stat, TeamMember, Tone};
use crate::navigation::NavTarget;
use crate::Route;

pub static PAGE: PageContent = PageContent {
    slug: "psicopedagogia",
    route: Route::Psychopedagogy,
    nav_label: "Psicopedagogia",
    accent: "#6d597a",
    hero_kicker: "Psicopedagogia Vivace",
    hero_title: "Cada um aprende",
    hero_words: &["do seu jeito", "no seu tempo", "com apoio"],
    hero_text: "Avaliação e intervenção psicopedagógica para dificuldades de leitura, escrita, matemática e organização dos estudos.",
    hero_image: "/assets/psicoped-hero.webp",
    panels_heading: "Serviços",
    panels_intro: "Toque para abrir e toque de novo para fechar.",
    panels: &[
        PanelDescriptor {
            id: "avaliacao",
            icon: "🔎",
            title: "Avaliação psicopedagógica",
            subtitle: "Entender como a criança aprende",
            body: "Entrevista com a família, contato com a escola e provas pedagógicas para mapear potencialidades e dificuldades.",
            features: &[
                Feature { id: "escola", title: "Escuta da escola", description: "Reunião com a coordenação e análise de cadernos.", tone: Tone::Sky },
                Feature { id: "devolutiva", title: "Devolutiva", description: "Relatório com orientações práticas.", tone: Tone::Teal },
            ],
            stats: &[Stat { value: "5", label: "encontros de avaliação" }],
            cta: "Agendar pela recepção",
            target: NavTarget::Route(Route::Home),
        },
        PanelDescriptor {
            id: "dislexia",
            icon: "🔡",
            title: "Dislexia e leitura",
            subtitle: "Intervenção fonológica estruturada",
            body: "Programas sistemáticos de consciência fonológica, decodificação e fluência leitora.",
            features: &[
                Feature { id: "fonologica", title: "Consciência fonológica", description: "Rimas, sílabas e fonemas.", tone: Tone::Coral },
                Feature { id: "fluencia", title: "Fluência", description: "Leitura repetida e monitorada.", tone: Tone::Sun },
            ],
            stats: &[],
            cta: "Ver avaliação neuropsicológica",
            target: NavTarget::Route(Route::Psychology),
        },
        PanelDescriptor {
            id: "discalculia",
            icon: "➗",
            title: "Matemática",
            subtitle: "Senso numérico e resolução de problemas",
            body: "Material concreto, jogos e estratégias metacognitivas para a matemática escolar.",
            features: &[
                Feature { id: "senso", title: "Senso numérico", description: "Quantidade, estimativa e reta numérica.", tone: Tone::Lilac },
            ],
            stats: &[],
            cta: "Agendar pela recepção",
            target: NavTarget::Route(Route::Home),
        },
    ],
    repeat: RepeatPolicy::Toggle,
    team_heading: "Psicopedagogas",
    team: &[
        TeamMember {
            name: "Renata Alves",
            role: "Psicopedagoga clínica",
            registry: "ABPp 4412",
            bio: "Avaliação e intervenção em leitura e escrita.",
            photo: "/assets/equipe/renata.webp",
        },
        TeamMember {
            name: "Luiza Fontes",
            role: "Psicopedagoga",
            registry: "ABPp 5120",
            bio: "Matemática e funções executivas.",
            photo: "/assets/equipe/luiza.webp",
        },
    ],
    closing_title: "A escola faz parte do plano",
    closing_text: "Todo acompanhamento inclui ao menos uma reunião semestral com a equipe escolar.",
};
