//! Static service catalog: consultation tariffs and mini case studies.
//!
//! The catalog is compiled in, loaded once, and never mutated. Lookups by
//! key return `Option` so an unknown key coming from a stale inline keyboard
//! can never fault the handler.

/// A paid consultation offering.
#[derive(Debug, PartialEq, Eq)]
pub struct Tariff {
    pub key: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
}

/// A short published case study shown from the cases menu.
#[derive(Debug, PartialEq, Eq)]
pub struct CaseStudy {
    pub key: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub static TARIFFS: [Tariff; 3] = [
    Tariff {
        key: "express",
        name: "Экспресс Васту-консультация",
        price: "2850 ₽",
        description: "Васту карта + 5 ключевых советов в PDF",
    },
    Tariff {
        key: "apartment",
        name: "Полный Васту-проект для квартиры/офиса",
        price: "от 14700 ₽",
        description: "Полная диагностика, рекомендации по материалам, цветам, коррекциям",
    },
    Tariff {
        key: "land",
        name: "Васту-анализ участка",
        price: "от 15600 ₽",
        description: "Анализ участка земли, рекомендации по размещению дома",
    },
];

pub static CASES: [CaseStudy; 2] = [
    CaseStudy {
        key: "workspace",
        title: "💼 Рабочее место дома — как зарабатывать на удалёнке",
        body: "🏠 **Васту советы для рабочего места:**\n\n\
1️⃣ **Локация:** Северо-восток или северо-запад комнаты (зоны успеха и денег)\n\n\
2️⃣ **Стол:** Расположи так, чтобы ты смотрел на север или восток\n\n\
3️⃣ **Цвета:**\n   - Для энергии: жёлтый, оранжевый\n   - Для спокойствия: светло-зелёный, голубой\n\n\
4️⃣ **Кактусы и растения:** Избегай острых кактусов (отгоняют клиентов)\n\n\
5️⃣ **Коррекции:** Если рабочее место на юго-западе — используй зелёный свет\n\n\
Результат: ✨ Больше фокуса, привлечение клиентов, гармония в работе",
    },
    CaseStudy {
        key: "newyear",
        title: "🎄 Подготовка дома к Новому году по Васту",
        body: "🏡 **Васту советы для новогодней энергии:**\n\n\
1️⃣ **Уборка:** Избавься от старого, ненужного (это новое начало!)\n\n\
2️⃣ **Входная дверь:** Её направление влияет на энергию\n   - Север: успех в бизнесе\n   - Восток: здоровье и рост\n   - Юго-запад: стабильность семьи\n\n\
3️⃣ **Цветовая схема на праздник:**\n   - Красный + золотой = удача и процветание\n   - Зелёный = здоровье и рост\n   - Синий = спокойствие и гармония\n\n\
4️⃣ **Ёлка:** Размещай на северо-востоке или в центре комнаты\n\n\
5️⃣ **Очищение пространства:** Зажги свечу или используй благовония\n\n\
Результат: ✨ Новый год принесёт свежую энергию и благополучие!",
    },
];

/// Look up a case study by its callback key.
pub fn find_case(key: &str) -> Option<&'static CaseStudy> {
    CASES.iter().find(|c| c.key == key)
}

/// Look up a tariff by key.
pub fn find_tariff(key: &str) -> Option<&'static Tariff> {
    TARIFFS.iter().find(|t| t.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_case_known_keys() {
        assert!(find_case("workspace").is_some());
        assert!(find_case("newyear").is_some());
    }

    #[test]
    fn test_find_case_unknown_key() {
        assert!(find_case("feng_shui").is_none());
        assert!(find_case("").is_none());
    }

    #[test]
    fn test_find_tariff() {
        let tariff = find_tariff("express").unwrap();
        assert_eq!(tariff.price, "2850 ₽");
        assert!(find_tariff("premium").is_none());
    }

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(TARIFFS.len(), 3);
        assert_eq!(CASES.len(), 2);
    }
}
