//! Fixed chatbot-side copy and the contextual prompt sent with each turn.
//!
//! The chatbot service speaks French and reacts to literal phrases such as
//! [`END_OF_DEBATE_COMMAND`], so these strings are part of its protocol.

use super::{ChatbotMode, Debate, DebateKind, Stance};

/// Phrase that asks the chatbot to close a scored debate and print its grade.
pub const END_OF_DEBATE_COMMAND: &str = "fin du débat";

pub const UNAVAILABLE_REPLY: &str = "Je suis actuellement indisponible. Veuillez réessayer plus tard.";

pub const EMPTY_REPLY: &str =
    "Je n'ai pas pu générer de réponse. Veuillez reformuler votre message.";

pub const EVALUATION_PENDING: &str = "Débat terminé. Évaluation en cours...";

pub const EVALUATION_FAILED: &str =
    "L'évaluation automatique a échoué. Notre équipe analysera manuellement votre débat.";

/// Reply stored when the chatbot call itself fails.
pub fn technical_error_reply(error: &impl std::fmt::Display) -> String {
    format!("Erreur technique avec le chatbot : {}", error)
}

pub const PROBE_UNAVAILABLE: &str = "❌ Chatbot indisponible";

/// Outcome line of a successful admin probe.
pub fn probe_success(session_id: Option<&str>, text: &str) -> String {
    format!(
        "✅ Test réussi!\nSession: {}\nRéponse: {}",
        session_id.unwrap_or("N/A"),
        text
    )
}

pub fn probe_error(error: &impl std::fmt::Display) -> String {
    format!("❌ Erreur: {}", error)
}

/// Opening message posted by the chatbot when a debate starts.
pub fn introduction(topic_title: &str, stance: Stance, kind: DebateKind) -> String {
    let (banner, closing) = match kind {
        DebateKind::Test => ("**DÉBAT TEST**", "À vous de jouer !"),
        DebateKind::Training => ("**ENTRAÎNEMENT**", "Prêt à débattre ?"),
    };
    format!(
        "{}\n\nSujet: {}\nVous: {}\nMoi: {}\n\n{}",
        banner,
        topic_title,
        stance.label_fr(),
        stance.opposite().label_fr(),
        closing
    )
}

/// Wraps a participant message with the debate context the chatbot needs.
pub fn contextual_prompt(debate: &Debate, topic_title: &str, message: &str) -> String {
    let mode = debate.kind().chatbot_mode();
    let banner = match mode {
        ChatbotMode::Score => {
            "⚠️ Mode ÉVALUATION activé. Je vais analyser tes arguments.\n\
             Pour terminer l'évaluation, envoie 'fin du débat'.\n"
        }
        ChatbotMode::Train => "🎯 Mode ENTRAÎNEMENT. Débattons !\n",
    };
    format!(
        "Contexte du débat:\n\
         - Sujet: {}\n\
         - Position utilisateur: {}\n\
         - Ma position: {}\n\
         - Mode: {}\n\
         \n{}\n\
         Message à analyser: {}",
        topic_title,
        debate.stance().label_fr(),
        debate.chatbot_stance().label_fr(),
        mode,
        banner,
        message
    )
}

/// Human-readable duration, `"N/A"` while the debate is running.
pub fn format_duration(duration_secs: Option<u32>) -> String {
    match duration_secs {
        Some(secs) => format!("{}min {}s", secs / 60, secs % 60),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{TopicId, UserId};

    fn debate(stance: Stance, kind: DebateKind) -> Debate {
        Debate::start(UserId::new("u").unwrap(), TopicId::new(), stance, kind)
    }

    #[test]
    fn test_introduction() {
        assert_eq!(
            introduction("Le nucléaire", Stance::For, DebateKind::Test),
            "**DÉBAT TEST**\n\nSujet: Le nucléaire\nVous: POUR\nMoi: CONTRE\n\nÀ vous de jouer !"
        );
    }

    #[test]
    fn training_introduction() {
        assert_eq!(
            introduction("Le nucléaire", Stance::Against, DebateKind::Training),
            "**ENTRAÎNEMENT**\n\nSujet: Le nucléaire\nVous: CONTRE\nMoi: POUR\n\nPrêt à débattre ?"
        );
    }

    #[test]
    fn training_prompt_layout() {
        let d = debate(Stance::For, DebateKind::Training);
        assert_eq!(
            contextual_prompt(&d, "Le vélo", "Bonjour"),
            "Contexte du débat:\n- Sujet: Le vélo\n- Position utilisateur: POUR\n\
             - Ma position: CONTRE\n- Mode: train\n\n🎯 Mode ENTRAÎNEMENT. Débattons !\n\n\
             Message à analyser: Bonjour"
        );
    }

    #[test]
    fn score_prompt_layout() {
        let d = debate(Stance::Against, DebateKind::Test);
        assert_eq!(
            contextual_prompt(&d, "Le vélo", "Argument"),
            "Contexte du débat:\n- Sujet: Le vélo\n- Position utilisateur: CONTRE\n\
             - Ma position: POUR\n- Mode: score\n\n\
             ⚠️ Mode ÉVALUATION activé. Je vais analyser tes arguments.\n\
             Pour terminer l'évaluation, envoie 'fin du débat'.\n\n\
             Message à analyser: Argument"
        );
    }

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(None), "N/A");
        assert_eq!(format_duration(Some(0)), "0min 0s");
        assert_eq!(format_duration(Some(125)), "2min 5s");
    }

    #[test]
    fn probe_copy() {
        assert_eq!(
            probe_success(Some("abc"), "Salut"),
            "✅ Test réussi!\nSession: abc\nRéponse: Salut"
        );
        assert_eq!(probe_error(&"boom"), "❌ Erreur: boom");
    }

    #[test]
    fn technical_error_prefix() {
        assert_eq!(
            technical_error_reply(&"timeout"),
            "Erreur technique avec le chatbot : timeout"
        );
    }
}
