//! Built-in marketplace vocabulary.
//!
//! Short ads are dominated by a small set of verbs, brands, word forms of a
//! few nouns and abbreviations that generic frequency lists underweight. The
//! table is applied as an override list: it can only raise a weight.

use phf::{Map, phf_map};

pub static CURATED: Map<&'static str, u64> = phf_map! {
    // user actions
    "куплю" => 60000, "продам" => 55000, "сдаю" => 50000, "сниму" => 25000,
    "ищу" => 70000, "отдам" => 40000, "обменяю" => 35000, "меняю" => 30000,
    "покупаю" => 25000, "продаю" => 20000, "сдам" => 30000,

    // electronics brands
    "айфон" => 45000, "iphone" => 40000, "samsung" => 30000, "xiaomi" => 25000,
    "huawei" => 20000, "nokia" => 15000, "lg" => 18000, "sony" => 16000,
    "macbook" => 20000, "asus" => 15000, "lenovo" => 12000, "hp" => 10000,
    "dell" => 8000, "acer" => 7000, "msi" => 6000,

    // car brands
    "тойота" => 15000, "toyota" => 12000, "бмв" => 10000, "bmw" => 8000,
    "мерседес" => 8000, "mercedes" => 6000, "ауди" => 7000, "audi" => 5000,
    "фольксваген" => 6000, "volkswagen" => 4000, "киа" => 8000, "kia" => 6000,
    "хендай" => 7000, "hyundai" => 5000, "ниссан" => 6000, "nissan" => 4000,

    // real estate, all cases
    "квартиру" => 60000, "квартира" => 55000, "квартире" => 50000, "квартиры" => 45000,
    "квартирой" => 35000, "квартир" => 40000, "квартирах" => 25000,
    "комнату" => 55000, "комната" => 50000, "комнате" => 45000, "комнаты" => 40000,
    "комнатой" => 30000, "комнат" => 35000, "комнатах" => 20000,
    "дом" => 45000, "дома" => 40000, "доме" => 35000, "домом" => 25000, "домов" => 30000,
    "студию" => 25000, "студия" => 20000, "студии" => 18000,

    // vehicles
    "машину" => 50000, "машина" => 45000, "машине" => 40000, "машины" => 35000,
    "машиной" => 25000, "машин" => 30000, "авто" => 35000, "автомобиль" => 30000,
    "мотоцикл" => 15000, "скутер" => 8000, "велосипед" => 12000,

    // geography
    "москве" => 40000, "москва" => 35000, "московской" => 25000, "подмосковье" => 30000,
    "спб" => 20000, "питер" => 15000, "санкт" => 12000, "петербург" => 10000,
    "екатеринбург" => 8000, "новосибирск" => 7000, "казань" => 6000,

    // condition
    "новый" => 40000, "новая" => 35000, "новое" => 30000, "новые" => 25000,
    "хорошем" => 30000, "хорошее" => 25000, "хороший" => 20000, "хорошая" => 18000,
    "отличном" => 25000, "отличное" => 20000, "отличный" => 15000, "отличная" => 12000,
    "идеальном" => 15000, "идеальное" => 12000, "рабочем" => 18000, "рабочее" => 15000,

    // prepositions and conjunctions
    "в" => 120000, "на" => 110000, "с" => 100000, "для" => 80000, "от" => 70000,
    "до" => 60000, "по" => 55000, "за" => 50000, "под" => 40000, "над" => 25000,
    "без" => 35000, "через" => 30000, "при" => 25000, "про" => 18000,
    "или" => 45000, "и" => 150000, "а" => 80000, "но" => 40000, "что" => 60000,

    // prices and terms
    "недорого" => 30000, "дешево" => 25000, "дорого" => 15000, "бесплатно" => 20000,
    "срочно" => 25000, "торг" => 18000, "торга" => 12000, "цена" => 25000,
    "рублей" => 20000, "тысяч" => 18000, "миллион" => 8000, "доставка" => 22000,

    // furniture and appliances
    "диван" => 35000, "кресло" => 18000, "стол" => 15000, "кровать" => 22000,
    "шкаф" => 18000, "комод" => 10000, "тумба" => 8000, "полка" => 7000,
    "холодильник" => 18000, "стиральная" => 15000, "посудомоечная" => 8000,
    "микроволновка" => 7000, "телевизор" => 20000, "компьютер" => 15000,

    // numbers
    "1" => 15000, "2" => 14000, "3" => 13000, "4" => 12000, "5" => 11000,
    "6" => 10000, "7" => 9000, "8" => 8000, "9" => 7000, "10" => 12000,
    "11" => 8000, "12" => 7000, "13" => 6000, "14" => 9000, "15" => 6000,
    "16" => 7000, "17" => 5000, "18" => 5000, "19" => 4000, "20" => 8000,
    "30" => 6000, "40" => 5000, "50" => 5000, "100" => 4000,

    // model qualifiers
    "плюс" => 12000, "макс" => 8000, "мини" => 6000,
    "стандарт" => 5000, "премиум" => 4000, "базовый" => 3000,

    // abbreviations
    "тел" => 12000, "руб" => 10000, "тыс" => 8000, "шт" => 6000,
    "кв" => 8000, "м" => 15000, "см" => 6000, "км" => 5000, "г" => 12000,
};

/// Iterate the curated table as override pairs.
pub fn entries() -> impl Iterator<Item = (&'static str, u64)> {
    CURATED.entries().map(|(&word, &weight)| (word, weight))
}
