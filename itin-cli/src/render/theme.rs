use termimad::{
    Alignment, MadSkin,
    crossterm::style::{Attribute, Color},
};

/// White text on the terminal background with orange accents.
pub struct Roadtrip;

impl Roadtrip {
    pub const FG: Color = Color::Rgb {
        r: 0xFF,
        g: 0xFF,
        b: 0xFF,
    }; // #FFFFFF
    pub const ORANGE: Color = Color::Rgb {
        r: 0xFF,
        g: 0xA5,
        b: 0x00,
    }; // #FFA500
    pub const PANEL: Color = Color::Rgb {
        r: 0x22,
        g: 0x22,
        b: 0x22,
    }; // #222222
    pub const MUTED: Color = Color::Rgb {
        r: 0x9E,
        g: 0x9E,
        b: 0x9E,
    }; // #9E9E9E
    pub const GREEN: Color = Color::Rgb {
        r: 0x98,
        g: 0xC3,
        b: 0x79,
    }; // #98C379
    pub const CYAN: Color = Color::Rgb {
        r: 0x56,
        g: 0xB6,
        b: 0xC2,
    }; // #56B6C2

    pub fn skin() -> MadSkin {
        let mut skin = MadSkin::default();

        skin.paragraph.set_fg(Self::FG);
        skin.bold.set_fg(Self::ORANGE);
        skin.italic.set_fg(Self::MUTED);

        skin.headers[0].set_fg(Self::ORANGE);
        skin.headers[0].add_attr(Attribute::Bold);
        skin.headers[0].align = Alignment::Center;

        skin.headers[1].set_fg(Self::FG);
        skin.headers[1].add_attr(Attribute::Bold);
        skin.headers[1].align = Alignment::Left;

        skin.headers[2].set_fg(Self::ORANGE);

        skin.table.set_fg(Self::ORANGE);
        skin.bullet.set_fg(Self::ORANGE);
        skin.inline_code.set_fg(Self::CYAN);
        skin.inline_code.set_bg(Self::PANEL);
        skin.code_block.set_fg(Self::GREEN);
        skin.code_block.set_bg(Self::PANEL);

        skin
    }
}
