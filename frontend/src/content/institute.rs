use super::{Feature, PageContent, PanelDescriptor, RepeatPolicy, Stat, TeamMember, Tone};
use crate::navigation::NavTarget;
use crate::Route;

pub static PAGE: PageContent = PageContent {
    slug: "instituto-incluir",
    route: Route::Institute,
    nav_label: "Instituto Incluir",
    accent: "#1d3557",
    hero_kicker: "Instituto Incluir",
    hero_title: "Inclusão se faz com",
    hero_words: &["formação", "prática", "parceria"],
    hero_text: "Braço educacional da Clínica Vivace: cursos, supervisão e consultoria para escolas e profissionais.",
    hero_image: "/assets/instituto-hero.webp",
    panels_heading: "O que oferecemos",
    panels_intro: "Toque em uma frente e toque de novo para se inscrever.",
    panels: &[
        PanelDescriptor {
            id: "cursos",
            icon: "🎓",
            title: "Cursos de formação",
            subtitle: "Para professores, auxiliares e terapeutas",
            body: "Turmas semestrais sobre desenho universal para a aprendizagem, TEA na escola e comunicação alternativa.",
            features: &[
                Feature { id: "dua", title: "Desenho universal", description: "Planejar aulas acessíveis a todos.", tone: Tone::Sky },
                Feature { id: "tea-escola", title: "TEA na escola", description: "Manejo de comportamento e adaptações.", tone: Tone::Lilac },
                Feature { id: "caa", title: "Comunicação alternativa", description: "Da prancha ao aplicativo.", tone: Tone::Coral },
            ],
            stats: &[
                Stat { value: "1.200", label: "educadores formados" },
                Stat { value: "40h", label: "por curso" },
            ],
            cta: "Ver agenda de cursos",
            target: NavTarget::Href("https://incluir.clinicavivace.com.br/cursos"),
        },
        PanelDescriptor {
            id: "consultoria",
            icon: "🏫",
            title: "Consultoria escolar",
            subtitle: "Inclusão como política da escola",
            body: "Diagnóstico institucional, formação da equipe e acompanhamento de estudantes com planos individualizados.",
            features: &[
                Feature { id: "pei", title: "Plano educacional individualizado", description: "Metas claras e revisões bimestrais.", tone: Tone::Teal },
                Feature { id: "mediador", title: "Supervisão de mediadores", description: "Encontros mensais de supervisão.", tone: Tone::Sun },
            ],
            stats: &[Stat { value: "40+", label: "escolas parceiras" }],
            cta: "Falar com o Instituto",
            target: NavTarget::Href("https://wa.me/5511987654321?text=Quero%20falar%20sobre%20consultoria%20escolar"),
        },
        PanelDescriptor {
            id: "clinica",
            icon: "🏥",
            title: "Atendimento clínico",
            subtitle: "Integração com a Clínica Vivace",
            body: "Estudantes acompanhados pelo Instituto têm acesso às equipes clínicas com comunicação direta com a escola.",
            features: &[
                Feature { id: "ponte", title: "Ponte clínica-escola", description: "Relatórios compartilhados com autorização da família.", tone: Tone::Sky },
            ],
            stats: &[],
            cta: "Conhecer a clínica",
            target: NavTarget::Route(Route::Home),
        },
    ],
    repeat: RepeatPolicy::Navigate,
    team_heading: "Coordenação do Instituto",
    team: &[
        TeamMember {
            name: "Patrícia Leme",
            role: "Coordenadora pedagógica",
            registry: "Mestre em Educação Especial",
            bio: "Vinte anos de experiência em redes públicas e privadas de ensino.",
            photo: "/assets/equipe/patricia.webp",
        },
        TeamMember {
            name: "Marcos Tavares",
            role: "Formador",
            registry: "CREFITO 3/12345-TO",
            bio: "Ministra os módulos de regulação sensorial em sala de aula.",
            photo: "/assets/equipe/marcos.webp",
        },
    ],
    closing_title: "Traga o Instituto para sua escola",
    closing_text: "Montamos propostas sob medida para redes de ensino e escolas particulares.",
};
