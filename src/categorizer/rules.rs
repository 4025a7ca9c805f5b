use crate::models::Category;

/// Built-in rule table, highest priority first.
pub const DEFAULT_RULES: &[(Category, &[&str])] = &[
    (Category::Food, &[
        "ifood", "restaurante", "restaurant", "mercado", "supermarket", "lanche", "padaria", "bakery", "grocery", "super"
    ]),
    (Category::Transport, &[
        "uber", "99app", "posto", "gasolina", "fuel", "passagem", "estacionamento", "parking", "metro", "onibus", "taxi"
    ]),
    (Category::Housing, &[
        "aluguel", "rent", "condominio", "luz", "energia", "internet", "agua", "water"
    ]),
    (Category::Leisure, &[
        "cinema", "show", "bar", "spotify", "netflix", "disney+", "ingresso", "ticket"
    ]),
    (Category::Health, &[
        "farmacia", "pharmacy", "drogaria", "medico", "doctor", "plano de saude", "exame", "hospital"
    ])
];
