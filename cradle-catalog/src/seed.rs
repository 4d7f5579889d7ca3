//! The fixed registry catalog. Inserted once, when the gift table is empty.

use chrono::Utc;
use cradle_shared::Gift;
use uuid::Uuid;

const IMG_DIAPERS: &str = "https://images.unsplash.com/photo-1622290291165-d341f1938b8a?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDQ2NDJ8MHwxfHNlYXJjaHwzfHxiYWJ5JTIwc2hvd2VyfGVufDB8fHx8MTc1MzQ5OTYwMXww&ixlib=rb-4.1.0&q=85";
const IMG_CLOTHES: &str = "https://images.unsplash.com/photo-1622290319146-7b63df48a635?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDQ2NDJ8MHwxfHNlYXJjaHwyfHxiYWJ5JTIwc2hvd2VyfGVufDB8fHx8MTc1MzQ5OTYwMXww&ixlib=rb-4.1.0&q=85";
const IMG_TWINS: &str = "https://images.unsplash.com/photo-1597413545419-4013431dbfec?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDk1Nzh8MHwxfHNlYXJjaHwxfHx0d2luc3xlbnwwfHx8fDE3NTM0OTk2MDl8MA&ixlib=rb-4.1.0&q=85";
const STORE: &str = "https://www.amazon.com.br";

/// Category tag and its display label, in browsing order.
pub const CATEGORIES: &[(&str, &str)] = &[
    ("fraldas", "Fraldas"),
    ("roupas", "Roupas"),
    ("higiene", "Higiene"),
    ("alimentacao", "Alimentação"),
    ("quarto", "Quarto"),
    ("passeio", "Passeio"),
];

#[derive(Debug, Clone, Copy)]
pub struct GiftSeed {
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub image_url: &'static str,
    pub buy_link: Option<&'static str>,
    pub quantity: i32,
    pub price_range: Option<&'static str>,
    pub is_unique: bool,
}

impl GiftSeed {
    pub fn to_gift(&self) -> Gift {
        Gift {
            id: Uuid::new_v4(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            category: self.category.to_string(),
            image_url: self.image_url.to_string(),
            buy_link: self.buy_link.map(String::from),
            quantity: self.quantity,
            price_range: self.price_range.map(String::from),
            is_unique: self.is_unique,
            created_at: Utc::now(),
        }
    }
}

pub const INITIAL_GIFTS: &[GiftSeed] = &[
    GiftSeed {
        name: "Fralda Recém-nascido (RN)",
        description: "Pacote de fraldas RN para os primeiros dias das bebês",
        category: "fraldas",
        image_url: IMG_DIAPERS,
        buy_link: Some(STORE),
        quantity: 50,
        price_range: Some("R$ 15-25"),
        is_unique: false,
    },
    GiftSeed {
        name: "Fralda Tamanho P",
        description: "Pacote de fraldas P para o crescimento das bebês",
        category: "fraldas",
        image_url: IMG_DIAPERS,
        buy_link: Some(STORE),
        quantity: 30,
        price_range: Some("R$ 20-30"),
        is_unique: false,
    },
    GiftSeed {
        name: "Fralda Tamanho M",
        description: "Pacote de fraldas M para quando crescerem mais",
        category: "fraldas",
        image_url: IMG_DIAPERS,
        buy_link: Some(STORE),
        quantity: 20,
        price_range: Some("R$ 25-35"),
        is_unique: false,
    },
    GiftSeed {
        name: "Body Manga Curta RN",
        description: "Body de algodão para recém-nascidas",
        category: "roupas",
        image_url: IMG_CLOTHES,
        buy_link: Some(STORE),
        quantity: 10,
        price_range: Some("R$ 15-30"),
        is_unique: false,
    },
    GiftSeed {
        name: "Macacão de Bebê",
        description: "Macacão confortável para o dia a dia",
        category: "roupas",
        image_url: IMG_CLOTHES,
        buy_link: Some(STORE),
        quantity: 8,
        price_range: Some("R$ 25-45"),
        is_unique: false,
    },
    GiftSeed {
        name: "Kit Higiene Bebê",
        description: "Kit completo com shampoo, sabonete e hidratante",
        category: "higiene",
        image_url: IMG_DIAPERS,
        buy_link: Some(STORE),
        quantity: 5,
        price_range: Some("R$ 40-80"),
        is_unique: false,
    },
    GiftSeed {
        name: "Toalhas de Bebê",
        description: "Kit com toalhas macias para as bebês",
        category: "higiene",
        image_url: IMG_CLOTHES,
        buy_link: Some(STORE),
        quantity: 6,
        price_range: Some("R$ 30-60"),
        is_unique: false,
    },
    GiftSeed {
        name: "Mamadeiras Anticólica",
        description: "Kit de mamadeiras para alimentação das gêmeas",
        category: "alimentacao",
        image_url: IMG_TWINS,
        buy_link: Some(STORE),
        quantity: 4,
        price_range: Some("R$ 50-100"),
        is_unique: false,
    },
    GiftSeed {
        name: "Berço para Gêmeas",
        description: "Berço seguro e confortável",
        category: "quarto",
        image_url: IMG_TWINS,
        buy_link: Some(STORE),
        quantity: 2,
        price_range: Some("R$ 300-600"),
        is_unique: true,
    },
    GiftSeed {
        name: "Kit Lençol de Berço",
        description: "Lençóis macios para o berço das bebês",
        category: "quarto",
        image_url: IMG_CLOTHES,
        buy_link: Some(STORE),
        quantity: 4,
        price_range: Some("R$ 40-80"),
        is_unique: false,
    },
    GiftSeed {
        name: "Carrinho Duplo para Gêmeas",
        description: "Carrinho prático para passear com as duas",
        category: "passeio",
        image_url: IMG_TWINS,
        buy_link: Some(STORE),
        quantity: 1,
        price_range: Some("R$ 400-800"),
        is_unique: true,
    },
    GiftSeed {
        name: "Bebê Conforto",
        description: "Bebê conforto para segurança no carro",
        category: "passeio",
        image_url: IMG_DIAPERS,
        buy_link: Some(STORE),
        quantity: 2,
        price_range: Some("R$ 200-400"),
        is_unique: true,
    },
];

/// Materializes the seed list with fresh ids.
pub fn seed_gifts() -> Vec<Gift> {
    INITIAL_GIFTS.iter().map(GiftSeed::to_gift).collect()
}

pub fn category_label(category: &str) -> Option<&'static str> {
    CATEGORIES
        .iter()
        .find(|(tag, _)| *tag == category)
        .map(|(_, label)| *label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_seed_uses_a_known_category() {
        for seed in INITIAL_GIFTS {
            assert!(category_label(seed.category).is_some(), "{} has unknown category", seed.name);
        }
    }

    #[test]
    fn test_seed_ids_are_distinct() {
        let gifts = seed_gifts();
        let ids: HashSet<_> = gifts.iter().map(|g| g.id).collect();
        assert_eq!(ids.len(), INITIAL_GIFTS.len());
        assert!(gifts.iter().all(|g| g.quantity > 0));
    }
}
