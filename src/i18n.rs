//! Static UI strings for each supported language.

use crate::models::Language;

/// UI strings used by the AI search view
#[derive(Debug)]
pub struct Translation {
    pub search: &'static str,
    pub search_placeholder: &'static str,
    pub main_heading: &'static str,
    pub intro: &'static str,
    pub examples: [&'static str; 4],
    pub outro: &'static str,
    pub ai_picks: &'static str,
}

const EN: Translation = Translation {
    search: "Search",
    search_placeholder: "What would you like to watch today?",
    main_heading: "Discover Movies with AI",
    intro: "Not sure what to watch? Don’t worry, I’ve got you covered! ✨ Just tell me what you’re in the mood for —",
    examples: [
        "Craving your fave actor’s movies? (Show me Ranbir Kapoor films)",
        "Want a genre binge? (Thrilling action, please!)",
        "Remember a scene or vibe? (Funny, romantic Indian retro movies)",
        "Or just type a movie name to find more like it!",
    ],
    outro: "Think of me as your movie buddy 🍿 — type anything, and I’ll dig up the perfect picks for you. 🚀",
    ai_picks: "AI Picks",
};

const HINDI: Translation = Translation {
    search: "खोज",
    search_placeholder: "आज आप क्या देखना चाहेंगे?",
    main_heading: "एआई के साथ फ़िल्में खोजें",
    intro: "क्या देखना है यह तय नहीं? चिंता मत कीजिए, मैं आपकी मदद करूँगा! ✨ बस मुझे बताएं कि आप किस मूड में हैं —",
    examples: [
        "अपने पसंदीदा अभिनेता की फ़िल्में? (मुझे Ranbir Kapoor की फ़िल्में दिखाएँ)",
        "किसी विशेष शैली का आनंद लेना चाहते हैं? (रोमांचक एक्शन, कृपया!)",
        "कोई सीन या वाइब याद है? (मजेदार, रोमांटिक इंडियन रेट्रो फ़िल्में)",
        "या बस किसी फ़िल्म का नाम टाइप करें ताकि मैं और दिखा सकूँ!",
    ],
    outro: "मुझे अपने मूवी बडी के रूप में सोचें 🍿 — कुछ भी टाइप करें, और मैं आपके लिए सही पिक्स खोज लूँगा। 🚀",
    ai_picks: "एआई की पसंद",
};

const SPANISH: Translation = Translation {
    search: "Buscar",
    search_placeholder: "¿Qué te gustaría ver hoy?",
    main_heading: "Descubre películas con IA",
    intro: "¿No sabes qué ver? ¡No te preocupes, yo te ayudo! ✨ Solo dime de qué humor estás —",
    examples: [
        "¿Películas de tu actor favorito? (Muéstrame películas de Ranbir Kapoor)",
        "¿Maratón de un género? (¡Acción emocionante, por favor!)",
        "¿Recuerdas una escena o una vibra? (Películas retro indias divertidas y románticas)",
        "¡O simplemente escribe un nombre de película para encontrar más parecidas!",
    ],
    outro: "Piensa en mí como tu compañero de películas 🍿 — escribe lo que quieras y encontraré las mejores opciones para ti. 🚀",
    ai_picks: "Selección de IA",
};

const FRENCH: Translation = Translation {
    search: "Rechercher",
    search_placeholder: "Que souhaitez-vous regarder aujourd'hui ?",
    main_heading: "Découvrez des films avec l'IA",
    intro: "Vous ne savez pas quoi regarder ? Pas de souci, je m'occupe de tout ! ✨ Dites-moi simplement ce qui vous tente —",
    examples: [
        "Envie de films de votre acteur préféré ? (Montre-moi les films de Ranbir Kapoor)",
        "Envie d’un genre particulier ? (De l’action palpitante, s’il vous plaît !)",
        "Vous vous souvenez d’une scène ou d’une ambiance ? (Films rétro indiens drôles et romantiques)",
        "Ou tapez simplement un nom de film pour en trouver d’autres similaires !",
    ],
    outro: "Considérez-moi comme votre ami ciné 🍿 — tapez n'importe quoi et je trouverai les films parfaits pour vous. 🚀",
    ai_picks: "Sélections IA",
};

const GERMAN: Translation = Translation {
    search: "Suchen",
    search_placeholder: "Was möchten Sie heute ansehen?",
    main_heading: "Entdecke Filme mit KI",
    intro: "Unsicher, was Sie schauen sollen? Keine Sorge, ich helfe Ihnen! ✨ Sagen Sie mir einfach, wonach Ihnen ist —",
    examples: [
        "Lust auf Filme Ihres Lieblingsschauspielers? (Zeig mir Ranbir Kapoor Filme)",
        "Bock auf ein Genre-Marathon? (Spannende Action bitte!)",
        "Erinnern Sie sich an eine Szene oder Stimmung? (Lustige, romantische indische Retro-Filme)",
        "Oder einfach einen Filmtitel eingeben, um ähnliche zu finden!",
    ],
    outro: "Denken Sie an mich als Ihren Filmfreund 🍿 — tippen Sie irgendetwas ein, und ich finde die perfekten Filme für Sie. 🚀",
    ai_picks: "KI-Empfehlungen",
};

const JAPANESE: Translation = Translation {
    search: "検索",
    search_placeholder: "今日は何を見たいですか？",
    main_heading: "AIで映画を見つけよう",
    intro: "何を見ればいいかわからない？大丈夫、任せて！ ✨ 見たい気分を教えてください —",
    examples: [
        "好きな俳優の映画が見たい？（Ranbir Kapoor の映画を見せて）",
        "ジャンルで決めたい？（スリリングなアクションをお願いします！）",
        "シーンや雰囲気を覚えてる？（面白くてロマンチックなインドのレトロ映画）",
        "または映画名を入力して似た作品を探そう！",
    ],
    outro: "私はあなたの映画仲間です 🍿 — 何でも入力して、完璧な作品を見つけます。🚀",
    ai_picks: "AIおすすめ",
};

/// Looks up the UI strings for a language
pub fn translation(lang: Language) -> &'static Translation {
    match lang {
        Language::En => &EN,
        Language::Hindi => &HINDI,
        Language::Spanish => &SPANISH,
        Language::French => &FRENCH,
        Language::German => &GERMAN,
        Language::Japanese => &JAPANESE,
    }
}
