/// Sound effects triggered by hero states.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Sound {
    HeroHurt,
    Lift,
    Throw,
}

pub trait Audio {
    fn play(&mut self, sound: Sound);
}
