//! Israel reading schedule, one entry per Hebrew year, sorted by year.
//!
//! Entry `i` of `weeks` is the reading on the Shabbat closing the week that
//! starts `7 * i` days after the Sunday on or before Rosh Hashana.

use crate::parasha::Parasha::*;
use crate::parasha::Reading::{Double as D, Single as S};
use crate::parasha::{Reading, YearRules};

const __: Reading = Reading::Blank;

pub(crate) const BUILTIN: &[YearRules] = &[
    YearRules {
        year: 5771,
        leap: true,
        exact_from: None,
        weeks: &[
            S(Haazinu), __, __, S(Bereshit), S(Noach), S(LechLecha), S(Vayera), S(ChayeiSara),
            S(Toldot), S(Vayetzei), S(Vayishlach), S(Vayeshev), S(Miketz), S(Vayigash),
            S(Vayechi), S(Shemot), S(Vaera), S(Bo), S(Beshalach), S(Yitro), S(Mishpatim),
            S(Terumah), S(Tetzaveh), S(KiTisa), S(Vayakhel), S(Pekudei), S(Vayikra), S(Tzav),
            S(Shmini), S(Tazria), S(Metzora), S(AchreiMot), __, S(Kedoshim), S(Emor), S(Behar),
            S(Bechukotai), S(Bamidbar), S(Nasso), S(Behaalotcha), S(Shlach), S(Korach),
            S(Chukat), S(Balak), S(Pinchas), S(Matot), S(Masei), S(Devarim), S(Vaetchanan),
            S(Eikev), S(Reeh), S(Shoftim), S(KiTeitzei), S(KiTavo), D(Nitzavim, Vayeilech),
            S(Haazinu),
        ],
        overrides: &[],
    },
    YearRules {
        year: 5772,
        leap: false,
        exact_from: None,
        weeks: &[
            S(Haazinu), __, __, S(Bereshit), S(Noach), S(LechLecha), S(Vayera), S(ChayeiSara),
            S(Toldot), S(Vayetzei), S(Vayishlach), S(Vayeshev), S(Miketz), S(Vayigash),
            S(Vayechi), S(Shemot), S(Vaera), S(Bo), S(Beshalach), S(Yitro), S(Mishpatim),
            S(Terumah), S(Tetzaveh), S(KiTisa), D(Vayakhel, Pekudei), S(Vayikra), S(Tzav), __,
            S(Shmini), D(Tazria, Metzora), D(AchreiMot, Kedoshim), S(Emor), S(Behar),
            S(Bechukotai), S(Bamidbar), S(Nasso), S(Behaalotcha), S(Shlach), S(Korach),
            S(Chukat), S(Balak), S(Pinchas), D(Matot, Masei), S(Devarim), S(Vaetchanan),
            S(Eikev), S(Reeh), S(Shoftim), S(KiTeitzei), S(KiTavo), S(Nitzavim), S(Vayeilech),
        ],
        overrides: &[],
    },
    YearRules {
        year: 5773,
        leap: false,
        exact_from: None,
        weeks: &[
            S(Vayeilech), S(Haazinu), __, S(Bereshit), S(Noach), S(LechLecha), S(Vayera),
            S(ChayeiSara), S(Toldot), S(Vayetzei), S(Vayishlach), S(Vayeshev), S(Miketz),
            S(Vayigash), S(Vayechi), S(Shemot), S(Vaera), S(Bo), S(Beshalach), S(Yitro),
            S(Mishpatim), S(Terumah), S(Tetzaveh), S(KiTisa), D(Vayakhel, Pekudei), S(Vayikra),
            S(Tzav), __, S(Shmini), D(Tazria, Metzora), D(AchreiMot, Kedoshim), S(Emor),
            D(Behar, Bechukotai), S(Bamidbar), S(Nasso), S(Behaalotcha), S(Shlach), S(Korach),
            S(Chukat), S(Balak), S(Pinchas), D(Matot, Masei), S(Devarim), S(Vaetchanan),
            S(Eikev), S(Reeh), S(Shoftim), S(KiTeitzei), S(KiTavo), D(Nitzavim, Vayeilech),
            S(Haazinu),
        ],
        overrides: &[],
    },
    YearRules {
        year: 5774,
        leap: true,
        exact_from: None,
        weeks: &[
            S(Haazinu), __, __, S(Bereshit), S(Noach), S(LechLecha), S(Vayera), S(ChayeiSara),
            S(Toldot), S(Vayetzei), S(Vayishlach), S(Vayeshev), S(Miketz), S(Vayigash),
            S(Vayechi), S(Shemot), S(Vaera), S(Bo), S(Beshalach), S(Yitro), S(Mishpatim),
            S(Terumah), S(Tetzaveh), S(KiTisa), S(Vayakhel), S(Pekudei), S(Vayikra), S(Tzav),
            S(Shmini), S(Tazria), S(Metzora), S(AchreiMot), __, S(Kedoshim), S(Emor), S(Behar),
            S(Bechukotai), S(Bamidbar), S(Nasso), S(Behaalotcha), S(Shlach), S(Korach),
            S(Chukat), S(Balak), S(Pinchas), S(Matot), S(Masei), S(Devarim), S(Vaetchanan),
            S(Eikev), S(Reeh), S(Shoftim), S(KiTeitzei), S(KiTavo), D(Nitzavim, Vayeilech),
            S(Haazinu),
        ],
        overrides: &[],
    },
    YearRules {
        year: 5775,
        leap: false,
        exact_from: None,
        weeks: &[
            S(Haazinu), __, __, S(Bereshit), S(Noach), S(LechLecha), S(Vayera), S(ChayeiSara),
            S(Toldot), S(Vayetzei), S(Vayishlach), S(Vayeshev), S(Miketz), S(Vayigash),
            S(Vayechi), S(Shemot), S(Vaera), S(Bo), S(Beshalach), S(Yitro), S(Mishpatim),
            S(Terumah), S(Tetzaveh), S(KiTisa), D(Vayakhel, Pekudei), S(Vayikra), S(Tzav), __,
            S(Shmini), D(Tazria, Metzora), D(AchreiMot, Kedoshim), S(Emor), S(Behar),
            S(Bechukotai), S(Bamidbar), S(Nasso), S(Behaalotcha), S(Shlach), S(Korach),
            S(Chukat), S(Balak), S(Pinchas), D(Matot, Masei), S(Devarim), S(Vaetchanan),
            S(Eikev), S(Reeh), S(Shoftim), S(KiTeitzei), S(KiTavo), S(Nitzavim), S(Vayeilech),
        ],
        overrides: &[],
    },
    YearRules {
        year: 5776,
        leap: true,
        exact_from: None,
        weeks: &[
            S(Vayeilech), S(Haazinu), __, S(Bereshit), S(Noach), S(LechLecha), S(Vayera),
            S(ChayeiSara), S(Toldot), S(Vayetzei), S(Vayishlach), S(Vayeshev), S(Miketz),
            S(Vayigash), S(Vayechi), S(Shemot), S(Vaera), S(Bo), S(Beshalach), S(Yitro),
            S(Mishpatim), S(Terumah), S(Tetzaveh), S(KiTisa), S(Vayakhel), S(Pekudei),
            S(Vayikra), S(Tzav), S(Shmini), S(Tazria), S(Metzora), __, S(AchreiMot),
            S(Kedoshim), S(Emor), S(Behar), S(Bechukotai), S(Bamidbar), S(Nasso),
            S(Behaalotcha), S(Shlach), S(Korach), S(Chukat), S(Balak), S(Pinchas), S(Matot),
            S(Masei), S(Devarim), S(Vaetchanan), S(Eikev), S(Reeh), S(Shoftim), S(KiTeitzei),
            S(KiTavo), S(Nitzavim), S(Vayeilech),
        ],
        overrides: &[],
    },
    YearRules {
        year: 5777,
        leap: false,
        exact_from: None,
        weeks: &[
            S(Vayeilech), S(Haazinu), __, S(Bereshit), S(Noach), S(LechLecha), S(Vayera),
            S(ChayeiSara), S(Toldot), S(Vayetzei), S(Vayishlach), S(Vayeshev), S(Miketz),
            S(Vayigash), S(Vayechi), S(Shemot), S(Vaera), S(Bo), S(Beshalach), S(Yitro),
            S(Mishpatim), S(Terumah), S(Tetzaveh), S(KiTisa), D(Vayakhel, Pekudei), S(Vayikra),
            S(Tzav), __, S(Shmini), D(Tazria, Metzora), D(AchreiMot, Kedoshim), S(Emor),
            D(Behar, Bechukotai), S(Bamidbar), S(Nasso), S(Behaalotcha), S(Shlach), S(Korach),
            S(Chukat), S(Balak), S(Pinchas), D(Matot, Masei), S(Devarim), S(Vaetchanan),
            S(Eikev), S(Reeh), S(Shoftim), S(KiTeitzei), S(KiTavo), D(Nitzavim, Vayeilech),
            S(Haazinu),
        ],
        overrides: &[],
    },
    YearRules {
        year: 5778,
        leap: false,
        exact_from: None,
        weeks: &[
            S(Haazinu), __, __, S(Bereshit), S(Noach), S(LechLecha), S(Vayera), S(ChayeiSara),
            S(Toldot), S(Vayetzei), S(Vayishlach), S(Vayeshev), S(Miketz), S(Vayigash),
            S(Vayechi), S(Shemot), S(Vaera), S(Bo), S(Beshalach), S(Yitro), S(Mishpatim),
            S(Terumah), S(Tetzaveh), S(KiTisa), D(Vayakhel, Pekudei), S(Vayikra), S(Tzav), __,
            S(Shmini), D(Tazria, Metzora), D(AchreiMot, Kedoshim), S(Emor), S(Behar),
            S(Bechukotai), S(Bamidbar), S(Nasso), S(Behaalotcha), S(Shlach), S(Korach),
            S(Chukat), S(Balak), S(Pinchas), D(Matot, Masei), S(Devarim), S(Vaetchanan),
            S(Eikev), S(Reeh), S(Shoftim), S(KiTeitzei), S(KiTavo), S(Nitzavim), S(Vayeilech),
        ],
        overrides: &[],
    },
    YearRules {
        year: 5779,
        leap: true,
        exact_from: None,
        weeks: &[
            S(Vayeilech), S(Haazinu), __, S(Bereshit), S(Noach), S(LechLecha), S(Vayera),
            S(ChayeiSara), S(Toldot), S(Vayetzei), S(Vayishlach), S(Vayeshev), S(Miketz),
            S(Vayigash), S(Vayechi), S(Shemot), S(Vaera), S(Bo), S(Beshalach), S(Yitro),
            S(Mishpatim), S(Terumah), S(Tetzaveh), S(KiTisa), S(Vayakhel), S(Pekudei),
            S(Vayikra), S(Tzav), S(Shmini), S(Tazria), S(Metzora), __, S(AchreiMot),
            S(Kedoshim), S(Emor), S(Behar), S(Bechukotai), S(Bamidbar), S(Nasso),
            S(Behaalotcha), S(Shlach), S(Korach), S(Chukat), S(Balak), S(Pinchas), S(Matot),
            S(Masei), S(Devarim), S(Vaetchanan), S(Eikev), S(Reeh), S(Shoftim), S(KiTeitzei),
            S(KiTavo), S(Nitzavim), S(Vayeilech),
        ],
        overrides: &[],
    },
    YearRules {
        year: 5780,
        leap: false,
        exact_from: None,
        weeks: &[
            S(Vayeilech), S(Haazinu), __, S(Bereshit), S(Noach), S(LechLecha), S(Vayera),
            S(ChayeiSara), S(Toldot), S(Vayetzei), S(Vayishlach), S(Vayeshev), S(Miketz),
            S(Vayigash), S(Vayechi), S(Shemot), S(Vaera), S(Bo), S(Beshalach), S(Yitro),
            S(Mishpatim), S(Terumah), S(Tetzaveh), S(KiTisa), D(Vayakhel, Pekudei), S(Vayikra),
            S(Tzav), __, S(Shmini), D(Tazria, Metzora), D(AchreiMot, Kedoshim), S(Emor),
            D(Behar, Bechukotai), S(Bamidbar), S(Nasso), S(Behaalotcha), S(Shlach), S(Korach),
            S(Chukat), S(Balak), S(Pinchas), D(Matot, Masei), S(Devarim), S(Vaetchanan),
            S(Eikev), S(Reeh), S(Shoftim), S(KiTeitzei), S(KiTavo), D(Nitzavim, Vayeilech), __,
        ],
        overrides: &[],
    },
    YearRules {
        year: 5781,
        leap: false,
        exact_from: Some(35),
        weeks: &[
            __, S(Haazinu), __, __, S(Bereshit), S(Noach), S(LechLecha), S(Vayera),
            S(ChayeiSara), S(Toldot), S(Vayetzei), S(Vayishlach), S(Vayeshev), S(Miketz),
            S(Vayigash), S(Vayechi), S(Shemot), S(Vaera), S(Bo), S(Beshalach), S(Yitro),
            S(Mishpatim), S(Terumah), S(Tetzaveh), S(KiTisa), D(Vayakhel, Pekudei), S(Vayikra),
            S(Tzav), __, S(Shmini), D(Tazria, Metzora), D(AchreiMot, Kedoshim), S(Emor),
            D(Behar, Bechukotai), S(Bamidbar), S(Nasso), S(Behaalotcha), S(Shlach), S(Korach),
            S(Chukat), S(Balak), S(Pinchas), D(Matot, Masei), S(Devarim), S(Vaetchanan),
            S(Eikev), S(Reeh), S(Shoftim), S(KiTeitzei), S(KiTavo), S(Nitzavim), S(Vayeilech),
        ],
        overrides: &[],
    },
    YearRules {
        year: 5782,
        leap: true,
        exact_from: None,
        weeks: &[
            S(Vayeilech), S(Haazinu), __, S(Bereshit), S(Noach), S(LechLecha), S(Vayera),
            S(ChayeiSara), S(Toldot), S(Vayetzei), S(Vayishlach), S(Vayeshev), S(Miketz),
            S(Vayigash), S(Vayechi), S(Shemot), S(Vaera), S(Bo), S(Beshalach), S(Yitro),
            S(Mishpatim), S(Terumah), S(Tetzaveh), S(KiTisa), S(Vayakhel), S(Pekudei),
            S(Vayikra), S(Tzav), S(Shmini), S(Tazria), S(Metzora), __, S(AchreiMot),
            S(Kedoshim), S(Emor), S(Behar), S(Bechukotai), S(Bamidbar), S(Nasso),
            S(Behaalotcha), S(Shlach), S(Korach), S(Chukat), S(Balak), S(Pinchas), S(Matot),
            S(Masei), S(Devarim), S(Vaetchanan), S(Eikev), S(Reeh), S(Shoftim), S(KiTeitzei),
            S(KiTavo), S(Nitzavim), S(Vayeilech),
        ],
        overrides: &[],
    },
    YearRules {
        year: 5783,
        leap: false,
        exact_from: None,
        weeks: &[
            S(Vayeilech), S(Haazinu), __, S(Bereshit), S(Noach), S(LechLecha), S(Vayera),
            S(ChayeiSara), S(Toldot), S(Vayetzei), S(Vayishlach), S(Vayeshev), S(Miketz),
            S(Vayigash), S(Vayechi), S(Shemot), S(Vaera), S(Bo), S(Beshalach), S(Yitro),
            S(Mishpatim), S(Terumah), S(Tetzaveh), S(KiTisa), D(Vayakhel, Pekudei), S(Vayikra),
            S(Tzav), __, S(Shmini), D(Tazria, Metzora), D(AchreiMot, Kedoshim), S(Emor),
            D(Behar, Bechukotai), S(Bamidbar), S(Nasso), S(Behaalotcha), S(Shlach), S(Korach),
            S(Chukat), S(Balak), S(Pinchas), D(Matot, Masei), S(Devarim), S(Vaetchanan),
            S(Eikev), S(Reeh), S(Shoftim), S(KiTeitzei), S(KiTavo), D(Nitzavim, Vayeilech), __,
        ],
        overrides: &[],
    },
    YearRules {
        year: 5784,
        leap: true,
        exact_from: None,
        weeks: &[
            __, S(Haazinu), __, __, S(Bereshit), S(Noach), S(LechLecha), S(Vayera),
            S(ChayeiSara), S(Toldot), S(Vayetzei), S(Vayishlach), S(Vayeshev), S(Miketz),
            S(Vayigash), S(Vayechi), S(Shemot), S(Vaera), S(Bo), S(Beshalach), S(Yitro),
            S(Mishpatim), S(Terumah), S(Tetzaveh), S(KiTisa), S(Vayakhel), S(Pekudei),
            S(Vayikra), S(Tzav), S(Shmini), S(Tazria), S(Metzora), __, S(AchreiMot),
            S(Kedoshim), S(Emor), S(Behar), S(Bechukotai), S(Bamidbar), S(Nasso),
            S(Behaalotcha), S(Shlach), S(Korach), S(Chukat), S(Balak), S(Pinchas),
            D(Matot, Masei), S(Devarim), S(Vaetchanan), S(Eikev), S(Reeh), S(Shoftim),
            S(KiTeitzei), S(KiTavo), D(Nitzavim, Vayeilech), S(Haazinu),
        ],
        overrides: &[],
    },
    YearRules {
        year: 5785,
        leap: false,
        exact_from: None,
        weeks: &[
            S(Haazinu), __, __, S(Bereshit), S(Noach), S(LechLecha), S(Vayera), S(ChayeiSara),
            S(Toldot), S(Vayetzei), S(Vayishlach), S(Vayeshev), S(Miketz), S(Vayigash),
            S(Vayechi), S(Shemot), S(Vaera), S(Bo), S(Beshalach), S(Yitro), S(Mishpatim),
            S(Terumah), S(Tetzaveh), S(KiTisa), S(Vayakhel), S(Pekudei), S(Vayikra), S(Tzav),
            __, S(Shmini), D(Tazria, Metzora), D(AchreiMot, Kedoshim), S(Emor),
            D(Behar, Bechukotai), S(Bamidbar), S(Nasso), S(Behaalotcha), S(Shlach), S(Korach),
            S(Chukat), S(Balak), S(Pinchas), D(Matot, Masei), S(Devarim), S(Vaetchanan),
            S(Eikev), S(Reeh), S(Shoftim), S(KiTeitzei), S(KiTavo), S(Nitzavim), S(Vayeilech),
        ],
        overrides: &[],
    },
    YearRules {
        year: 5786,
        leap: false,
        exact_from: None,
        weeks: &[
            S(Vayeilech), S(Haazinu), __, S(Bereshit), S(Noach), S(LechLecha), S(Vayera),
            S(ChayeiSara), S(Toldot), S(Vayetzei), S(Vayishlach), S(Vayeshev), S(Miketz),
            S(Vayigash), S(Vayechi), S(Shemot), S(Vaera), S(Bo), S(Beshalach), S(Yitro),
            S(Mishpatim), S(Terumah), S(Tetzaveh), S(KiTisa), D(Vayakhel, Pekudei), S(Vayikra),
            S(Tzav), __, S(Shmini), D(Tazria, Metzora), D(AchreiMot, Kedoshim), S(Emor),
            D(Behar, Bechukotai), S(Bamidbar), S(Nasso), S(Behaalotcha), S(Shlach), S(Korach),
            S(Chukat), S(Balak), S(Pinchas), D(Matot, Masei), S(Devarim), S(Vaetchanan),
            S(Eikev), S(Reeh), S(Shoftim), S(KiTeitzei), S(KiTavo), D(Nitzavim, Vayeilech), __,
        ],
        overrides: &[],
    },
    YearRules {
        year: 5787,
        leap: true,
        exact_from: None,
        weeks: &[
            __, S(Haazinu), __, __, S(Bereshit), S(Noach), S(LechLecha), S(Vayera),
            S(ChayeiSara), S(Toldot), S(Vayetzei), S(Vayishlach), S(Vayeshev), S(Miketz),
            S(Vayigash), S(Vayechi), S(Shemot), S(Vaera), S(Bo), S(Beshalach), S(Yitro),
            S(Mishpatim), S(Terumah), S(Tetzaveh), S(KiTisa), S(Vayakhel), S(Pekudei),
            S(Vayikra), S(Tzav), S(Shmini), S(Tazria), S(Metzora), __, S(AchreiMot),
            S(Kedoshim), S(Emor), S(Behar), S(Bechukotai), S(Bamidbar), S(Nasso),
            S(Behaalotcha), S(Shlach), S(Korach), S(Chukat), S(Balak), S(Pinchas),
            D(Matot, Masei), S(Devarim), S(Vaetchanan), S(Eikev), S(Reeh), S(Shoftim),
            S(KiTeitzei), S(KiTavo), D(Nitzavim, Vayeilech), __,
        ],
        overrides: &[],
    },
    YearRules {
        year: 5788,
        leap: false,
        exact_from: Some(0),
        weeks: &[
            __, S(Haazinu), __, __, S(Bereshit), S(Noach), S(LechLecha), S(Vayera),
            S(ChayeiSara), S(Toldot), S(Vayetzei), S(Vayishlach), S(Vayeshev), S(Miketz),
            S(Vayigash), S(Vayechi), S(Shemot), S(Vaera), S(Bo), S(Beshalach), S(Yitro),
            S(Mishpatim), S(Terumah), S(Tetzaveh), S(KiTisa), D(Vayakhel, Pekudei), S(Vayikra),
            S(Tzav), __, S(Shmini), D(Tazria, Metzora), D(AchreiMot, Kedoshim), S(Emor),
            D(Behar, Bechukotai), S(Bamidbar), S(Nasso), S(Behaalotcha), S(Shlach), S(Korach),
            S(Chukat), S(Balak), S(Pinchas), D(Matot, Masei), S(Devarim), S(Vaetchanan),
            S(Eikev), S(Reeh), S(Shoftim), S(KiTeitzei), S(KiTavo), D(Nitzavim, Vayeilech),
            S(Haazinu),
        ],
        overrides: &[],
    },
    YearRules {
        year: 5789,
        leap: false,
        exact_from: None,
        weeks: &[
            S(Haazinu), __, __, S(Bereshit), S(Noach), S(LechLecha), S(Vayera), S(ChayeiSara),
            S(Toldot), S(Vayetzei), S(Vayishlach), S(Vayeshev), S(Miketz), S(Vayigash),
            S(Vayechi), S(Shemot), S(Vaera), S(Bo), S(Beshalach), S(Yitro), S(Mishpatim),
            S(Terumah), S(Tetzaveh), S(KiTisa), D(Vayakhel, Pekudei), S(Vayikra), S(Tzav), __,
            S(Shmini), D(Tazria, Metzora), D(AchreiMot, Kedoshim), S(Emor), S(Behar),
            S(Bechukotai), S(Bamidbar), S(Nasso), S(Behaalotcha), S(Shlach), S(Korach),
            S(Chukat), S(Balak), S(Pinchas), D(Matot, Masei), S(Devarim), S(Vaetchanan),
            S(Eikev), S(Reeh), S(Shoftim), S(KiTeitzei), S(KiTavo), S(Nitzavim), S(Vayeilech),
        ],
        overrides: &[],
    },
];
