//! Release title parser golden tests.
//!
//! Literal titles with their expected structure:
//! - Single episodes across every naming style the parser recognizes
//! - Specials, split episodes and multi-episode ranges
//! - Release group extraction with repost suffixes and trailing comments
//! - Canonical titles parsing back to the same structure

use releasegate_core::parser::TitleParser;
use releasegate_core::{Language, Quality};

fn parser() -> TitleParser {
    TitleParser::new().unwrap()
}

/// (title, series title, season, episode)
const SINGLE_EPISODES: &[(&str, &str, u32, u32)] = &[
    ("Series.With.Title.S02E15", "Series With Title", 2, 15),
    ("Series.and.a.Title.103.720p.HDTV.X264-DIMENSION", "Series and a Title", 1, 3),
    ("Series.and.a.Title.113.720p.HDTV.X264-DIMENSION", "Series and a Title", 1, 13),
    ("Series.and.a.Title.1013.720p.HDTV.X264-DIMENSION", "Series and a Title", 10, 13),
    ("Series.Title.4x05.HDTV.XviD-LOL", "Series Title", 4, 5),
    ("Series.Title.S03E06.DVDRip.XviD-WiDE", "Series Title", 3, 6),
    ("Series.Title.S10E27.WS.DSR.XviD-2HD", "Series Title", 10, 27),
    ("Series.Title.2010.S02E14.HDTV.XviD-LOL", "Series Title 2010", 2, 14),
    ("Series Title 0 S01E19 720p WEB DL DD5 1 H 264 NT", "Series Title 0", 1, 19),
    (
        "The Series Title S01E14 A Message Back 720p WEB DL DD5 1 H264 SURFER",
        "The Series Title",
        1,
        14,
    ),
    ("Series Title S01E07 WS PDTV XviD FUtV", "Series Title", 1, 7),
    ("Series.Title.S03E19.DVDRip.XviD-OSiTV", "Series Title", 3, 19),
    ("S03E09 WS PDTV XviD FUtV", "", 3, 9),
    ("5x10 WS PDTV XviD FUtV", "", 5, 10),
    ("Series.Title.2009.S01E14.HDTV.XviD-LOL", "Series Title 2009", 1, 14),
    ("Series.Title.1995.S03E20.HDTV.XviD-LOL", "Series Title 1995", 3, 20),
    ("Series.Title.S03E115.DVDRip.XviD-OSiTV", "Series Title", 3, 115),
    ("Series Title - S02E21 - 94 Meetings - 720p TV.mkv", "Series Title", 2, 21),
    (
        "24-7 Series - Title - Road to the Sonarr - S01E03 - Episode 3.mkv",
        "24-7 Series - Title - Road to the Sonarr",
        1,
        3,
    ),
    ("Series.Title.Inc.S03E19.DVDRip.\"XviD\"-OSiTV", "Series Title Inc", 3, 19),
    ("Series Title-0 (2010) - 1x05 - Missing Title", "Series Title-0 (2010)", 1, 5),
    ("Series Title-0 (2010) - 1x05 - Title", "Series Title-0 (2010)", 1, 5),
    ("Series Title - S06E13 - 5 to 9 [DVD]", "Series Title", 6, 13),
    ("Series Title - S02E21 - 18-5-4", "Series Title", 2, 21),
    ("Series.Title.S01E07.21.0.Jump.Street.720p.WEB-DL.DD5.1.h.264-KiNGS", "Series Title", 1, 7),
    ("Series.Title.525", "Series Title", 5, 25),
    ("Series Title - 10x12 - 24 Hour Propane People [SDTV]", "Series Title", 10, 12),
    ("Series Title S01E06 3 Beers For Batali DVDRip XviD SPRiNTER", "Series Title", 1, 6),
    (
        "24 7 Series-Title - Road to the Sonarr Part01 720p HDTV x264 ORENJI",
        "24 7 Series-Title - Road to the Sonarr",
        1,
        1,
    ),
    (
        "24 7 Series-Title - Road to the Sonarr Part 02 720p HDTV x264 ORENJI",
        "24 7 Series-Title - Road to the Sonarr",
        1,
        2,
    ),
    (
        "24-7 Series-Title - Road to the Sonarr - S01E01 - Part 1",
        "24-7 Series-Title - Road to the Sonarr",
        1,
        1,
    ),
    ("S6E02-Unwrapped-(Playing With Food) - [DarkData]", "", 6, 2),
    ("S06E03-Unwrapped-(Number Ones Unwrapped) - [DarkData]", "", 6, 3),
    ("Series Title S02E21 18 5 4 720p WEB DL DD5 1 h 264 EbP", "Series Title", 2, 21),
    ("01x04 - Halloween, Part 1 - 720p WEB-DL", "", 1, 4),
    ("series.s03.e05.ws.dvdrip.xvid-m00tv", "series", 3, 5),
    ("series.2009.416.hdtv-lol", "series 2009", 4, 16),
    ("series.six-0.2010.217.hdtv-lol", "series six-0 2010", 2, 17),
    ("Series Title - S1936E18 - I Love to Singa", "Series Title", 1936, 18),
    ("Series_Title!_-_7x6_-_The_Scarlett_Getter_[SDTV]", "Series Title!", 7, 6),
    ("Series_Title_-_1x1_-_Live_and_Learn_[HDTV-720p]", "Series Title", 1, 1),
    ("Top Series - 07x03 - 2005.11.70", "Top Series", 7, 3),
    ("Series.S04E09.Swan.Song.1080p.WEB-DL.DD5.1.H.264-ECI", "Series", 4, 9),
    ("S08E20 50-50 Carla [DVD]", "", 8, 20),
    ("Series S08E20 50-50 Carla [DVD]", "Series", 8, 20),
    ("S02E10 6-50 to SLC [SDTV]", "", 2, 10),
    ("Developers & Coders S02E10 6-50 to SLC [SDTV]", "Developers & Coders", 2, 10),
    (
        "The_Big_Series_Title_-_6x12_-_The_Code_Review_Equivalency_[HDTV-720p]",
        "The Big Series Title",
        6,
        12,
    ),
    ("Series_Title.19x06.720p_HDTV_x264-FoV", "Series Title", 19, 6),
    ("Series.S03E10.Alexandra.720p.WEB-DL.AAC2.0.H.264-CROM.mkv", "Series", 3, 10),
    ("(Series of Title s03 e - \"Series of Title Season 3 Episode 10\"", "Series of Title", 3, 10),
    ("Series.Hunters.Galatic.S05E607.720p.hdtv.x264", "Series Hunters Galatic", 5, 607),
    (
        "Series.Time.With.Dev1.And.Dev2.S01E20.720p.BluRay.x264-DEiMOS",
        "Series Time With Dev1 And Dev2",
        1,
        20,
    ),
    ("Series.S01E04.2-45.PM.[HDTV-720p].mkv", "Series", 1, 4),
    ("S01E04", "", 1, 4),
    ("1x04", "", 1, 4),
    (
        "10.Lines.You.Know.About.Code.S02E04.Prohibition.HDTV.XviD-AFG",
        "10 Lines You Know About Code",
        2,
        4,
    ),
    ("30 Series - S01E01 - Pilot.avi", "30 Series", 1, 1),
    ("666 Series Title - S01E01", "666 Series Title", 1, 1),
    ("Series 13 - S01E01", "Series 13", 1, 1),
    ("Don't Ever Trust The B---- in Code 23.S01E01", "Don't Ever Trust The B---- in Code 23", 1, 1),
    ("Warehouse.13.S01E01", "Warehouse 13", 1, 1),
    ("Never.Trust.The.B----.in.Code.23.S01E01", "Never Trust The B---- in Code 23", 1, 1),
    ("42 S01E01", "42", 1, 1),
    ("69.S01E01", "69", 1, 1),
    ("Series - 2x12 - The Choice [HDTV-1080p].mkv", "Series", 2, 12),
    ("Series - 2x4 - New Car Smell [HDTV-1080p].mkv", "Series", 2, 4),
    ("Top Series - 06x11 - 2005.08.07", "Top Series", 6, 11),
    ("The_Series_US_s06e19_04.28.2014_hdtv.x264.Poke.mp4", "The Series US", 6, 19),
    ("the.Series.110.hdtv-lol", "the Series", 1, 10),
    ("2009x09 [SDTV].avi", "", 2009, 9),
    ("S2009E09 [SDTV].avi", "", 2009, 9),
    ("Series Week S2009E09 [SDTV].avi", "Series Week", 2009, 9),
    ("St_Series_209_Aids_And_Comfort", "St Series", 2, 9),
    ("[Impatience] Series - 0x01 [720p][34073169].mkv", "Series", 0, 1),
    ("Series.Title.S15.E06.City.Sushi", "Series Title", 15, 6),
    ("Series Title - S15 E06 - City Code", "Series Title", 15, 6),
    ("Series S1-E1-WEB-DL-1080p-NZBgeek", "Series", 1, 1),
    ("Series S1E1-WEB-DL-1080p-NZBgeek", "Series", 1, 1),
    ("Series.S010E16.720p.HDTV.X264-DIMENSION", "Series", 10, 16),
    ("[ www.Torrenting.com ] - Series.2012.S02E17.720p.HDTV.X264-DIMENSION", "Series 2012", 2, 17),
    ("Series.2012.S02E18.720p.HDTV.X264-DIMENSION.mkv", "Series 2012", 2, 18),
    ("Series - Season 1 - Episode 01 (Resolution).avi", "Series", 1, 1),
    ("5x09 - 100 [720p WEB-DL].mkv", "", 5, 9),
    ("1x03 - 274 [1080p BluRay].mkv", "", 1, 3),
    ("1x03 - The 112th Congress [1080p BluRay].mkv", "", 1, 3),
    ("Series.2012.S02E14.720p.HDTV.X264-DIMENSION [PublicHD].mkv", "Series 2012", 2, 14),
    ("Series.2009.S06E03.720p.HDTV.X264-DIMENSION [PublicHD].mkv", "Series 2009", 6, 3),
    ("20-1.2014.S02E01.720p.HDTV.x264-CROOKS", "20-1 2014", 2, 1),
    ("Series - S01E09 - Debate 109", "Series", 1, 9),
    ("Series - S02E02 - My Maserati Does 185", "Series", 2, 2),
    ("6x13 - The Series Show 100th Episode Special", "", 6, 13),
    ("The Series And the Show - S41 E10478 - 2014-08-15", "The Series And the Show", 41, 10478),
    ("The Series And the Show - S42 E10591 - 2015-01-27", "The Series And the Show", 42, 10591),
    ("Series Title [1x05] Episode Title", "Series Title", 1, 5),
    ("Series Title [S01E05] Episode Title", "Series Title", 1, 5),
    ("Series Title Season 01 Episode 05 720p", "Series Title", 1, 5),
    ("The Series And the Show - S42 E10713 - 2015-07-20.mp4", "The Series And the Show", 42, 10713),
    ("Series.103.hdtv-lol[ettv].mp4", "Series", 1, 3),
    ("Series - 01x02 - The Rooster Prince - [itz_theo]", "Series", 1, 2),
    ("Series (2009) - [06x16] - Room 147.mp4", "Series (2009)", 6, 16),
    ("grp-zoos01e11-1080p", "grp-zoo", 1, 11),
    ("grp-zoo-s01e11-1080p", "grp-zoo", 1, 11),
    ("Series!.S2016E14.2016-01-20.avi", "Series!", 2016, 14),
    (
        "John.Smith.The.Series.Title.5of9.The.Universe.Of.Development.1990.DVDRip.x264-HANDJOB",
        "John Smith The Series Title",
        1,
        5,
    ),
    ("Judge Developer 2016 02 25 S20E142", "Judge Developer", 20, 142),
    ("Judge Developer 2016 02 25 S20E143", "Judge Developer", 20, 143),
    ("Red Show - S02 - E06 - Parallel Series", "Red Show", 2, 6),
    ("App.Sonarr.Made.in.Canada.Part.Two.720p.HDTV.x264-2HD", "App Sonarr Made in Canada", 1, 2),
    (
        "The.100000.Series.Title.2016.S01E05.720p.HDTV.x264-W4F",
        "The 100000 Series Title 2016",
        1,
        5,
    ),
    ("Series S01E02 (22 October 2016) HDTV 720p [Webrip]", "Series", 1, 2),
    ("this.is.a.show.2015.0308-yestv", "this is a show 2015", 3, 8),
    ("Series - S2016E231", "Series", 2016, 231),
    ("Series - 2016x231", "Series", 2016, 231),
    ("Short.Series.S26E022.HDTV.x264-FiHTV", "Short Series", 26, 22),
    ("Super.Series.S01.Ep06.1080p.BluRay.DTS.x264-MiR", "Super Series", 1, 6),
    ("Series 104 - S01E07 The Developers [SDTV]", "Series 104", 1, 7),
    ("11-02 The Series Reaction (HD).m4v", "", 11, 2),
    (
        "Plus Series la title - S14E3533 FRENCH WEBRIP H.264 AAC (09.05.2018)",
        "Plus Series la title",
        14,
        3533,
    ),
    (
        "The Series - S01E02 - Earth Skills HDTV-1080p AVC DTS [EN+FR+ES+PT+DA+FI+NB+SV]",
        "The Series",
        1,
        2,
    ),
    ("Series Title - S01E01 - Day 100 [SDTV]", "Series Title", 1, 1),
    ("Series.Title.S01.Ep.01.English.AC3.DL.1080p.BluRay-Sonarr", "Series Title", 1, 1),
    ("Series.Title.S01.E.01.English.AC3.DL.1080p.BluRay-Sonarr", "Series Title", 1, 1),
    ("Series.Title.S01.Ep01.English.AC3.DL.1080p.BluRay-Sonarr", "Series Title", 1, 1),
    ("Series.Title.S01.E01.English.AC3.DL.1080p.BluRay-Sonarr", "Series Title", 1, 1),
    ("Series.Title.S01EP01.English.AC3.DL.1080p.BluRay-Sonarr", "Series Title", 1, 1),
    ("tvs-amgo-dd51-dl-7p-azhd-x264-103", "tvs-amgo-dd51-dl-7p-azhd", 1, 3),
    ("Series Title - S01E01 [AC3 5.1 Castellano][www.descargas2020.org]", "Series Title", 1, 1),
    ("Series Title - [02x01] - Episode 1", "Series Title", 2, 1),
    ("Series.Title.Of.S01E01.xyz", "Series Title Of", 1, 1),
    ("[RlsGrp] Series Title - S01E27 - 24-Hour", "Series Title", 1, 27),
    ("Series Title - S02E01 1920x910", "Series Title", 2, 1),
    ("Anime Title - S2020E1527 [1527] [2020-10-11] - Episode Title", "Anime Title", 2020, 1527),
    (
        "Anime Title - S2010E994 [0994] [2010-02-28] - Episode Title [x264 720p][AAC 2ch][HS][Shion+GakiDave]",
        "Anime Title",
        2010,
        994,
    ),
    (
        "Series Title - Temporada 2 [HDTV 720p][Cap.201][AC3 5.1 Castellano][www.pctnew.com]",
        "Series Title",
        2,
        1,
    ),
    (
        "Series Title - Temporada 2 [HDTV 720p][Cap.1901][AC3 5.1 Castellano][www.pctnew.com]",
        "Series Title",
        19,
        1,
    ),
    ("Series Title 1x1", "Series Title", 1, 1),
    ("1x1", "", 1, 1),
    (
        "Series Title [2022] [S25E13] [PL] [720p] [WEB-DL-CZRG] [x264] ",
        "Series Title [2022]",
        25,
        13,
    ),
    ("Series T Se.3 afl.3", "Series T", 3, 3),
    (
        "[Anime Chap] Anime Title! S01E09 [WEB 1080p] {OP & ED Lyrics} - Episode 9 (The Eminence in Shadow)",
        "Anime Title!",
        1,
        9,
    ),
    (
        "[Anime Chap] Anime Title! S01E12 [WEB 1080p] {OP & ED Lyrics} - Episode 12 (The Eminence in Shadow)",
        "Anime Title!",
        1,
        12,
    ),
    ("SeriesTitle-S16E08-10426008-0.mkv", "SeriesTitle", 16, 8),
    ("Series-S07E12-31st_Century_Fox-[Bluray-1080p].mkv", "Series", 7, 12),
    ("TheTitle-S12E13-3_Acts_of_God.mkv", "TheTitle", 12, 13),
    ("Series Title - Temporada 2 [HDTV 720p][Cap.408]", "Series Title", 4, 8),
    ("Series Title [HDTV][Cap.104](website.com).avi", "Series Title", 1, 4),
    ("Series Title [HDTV][Cap.402](website.com).avi", "Series Title", 4, 2),
    ("Series Title [HDTV 720p][Cap.101](website.com).mkv", "Series Title", 1, 1),
    (
        "Босх: Спадок (S2E1) / Series: Legacy (S2E1) (2023) WEB-DL 1080p Ukr/Eng | sub Eng",
        "Series: Legacy",
        2,
        1,
    ),
    (
        "Босх: Спадок / Series: Legacy / S2E1 of 10 (2023) WEB-DL 1080p Ukr/Eng | sub Eng",
        "Series: Legacy",
        2,
        1,
    ),
    ("Titles.s06e01.1999.BDRip.1080p.Ukr.Eng.AC3.Hurtom.TNU.Tenax555", "Titles", 6, 1),
    ("Titles.s06.01.1999.BDRip.1080p.Ukr.Eng.AC3.Hurtom.TNU.Tenax555", "Titles", 6, 1),
    ("[Judas] Series Title (2024) - S01E14", "Series Title (2024)", 1, 14),
    ("[ReleaseGroup] SeriesTitle S01E1 Webdl 1080p", "SeriesTitle", 1, 1),
    ("[SubsPlus+] Series no Chill - S02E01 (NF WEB 1080p AVC AAC)", "Series no Chill", 2, 1),
    ("[SubsPlus+] Series no Chill - S02E01v2 (NF WEB 1080p AVC AAC)", "Series no Chill", 2, 1),
    ("Series - Temporada 1 - [HDTV 1080p][Cap.101](wolfmax4k.com)", "Series", 1, 1),
    ("Series [HDTV 1080p][Cap.101](wolfmax4k.com)", "Series", 1, 1),
    ("Series [HDTV 1080p][Cap. 101](wolfmax4k.com).mkv", "Series", 1, 1),
    (
        "Amazing Title (2024/S01E07/DSNP/WEB-DL/1080p/ESP/EAC3 5.1/ING/EAC3 5.1 Atmos/SUBS) SPWEB",
        "Amazing Title (2024)",
        1,
        7,
    ),
    (
        "Mini Title (Miniserie) (2024/S01E07/DSNP/WEB-DL/1080p/ESP/EAC3 5.1/ING/EAC3 5.1 Atmos/SUBS) SPWEB",
        "Mini Title (2024)",
        1,
        7,
    ),
    ("Series.S006E18.Some.Title.Name-Part.1.1080p.WEB-DL.AAC2.0.H.264-Release", "Series", 6, 18),
    (
        "Series.2006.S006E18.Some.Title.Name-Part.1.1080p.WEB-DL.AAC2.0.H.264-Release",
        "Series 2006",
        6,
        18,
    ),
    ("221208 ABC123 Series Title Season 39 ep11.mp4", "ABC123 Series Title", 39, 11),
    ("221208 ABC123 Series Title ep34[1080p60 H264].mp4", "ABC123 Series Title", 1, 34),
    ("221205 ABC123 17研究所！ #17.ts", "ABC123 17研究所！", 1, 17),
    ("221201 Series Title! ABC123 ep219[720p.h264].mp4", "Series Title! ABC123", 1, 219),
    ("221206 Series Title! ep08(Tanaka Miku).ts", "Series Title!", 1, 8),
    ("210810 ABC123 Series Title ep05.mp4", "ABC123 Series Title", 1, 5),
    ("221204 乃木坂工事中 ep389.mp4", "乃木坂工事中", 1, 389),
    ("Series Title S01E11.5 [SP]-The Poppies Bloom Red on the Battlefield", "Series Title", 1, 11),
    (
        "Series.Title.S06E01b.Fade.Out.Fade.in.Part.2.1080p.DSNP.WEB-DL.AAC2.0.H.264-FLUX",
        "Series Title",
        6,
        1,
    ),];

/// (title, release group)
const RELEASE_GROUPS: &[(&str, Option<&str>)] = &[
    ("Series.2009.S01E14.English.HDTV.XviD-LOL", Some("LOL")),
    ("Series 2009 S01E14 English HDTV XviD LOL", None),
    ("Series Now S05 EXTRAS DVDRip XviD RUNNER", None),
    ("Series.Title.S01.EXTRAS.DVDRip.XviD-RUNNER", Some("RUNNER")),
    ("2020.Series.2011.12.02.PDTV.XviD-C4TV", Some("C4TV")),
    ("The.Series.S03E115.DVDRip.XviD-OSiTV", Some("OSiTV")),
    ("Series Title - S01E01 - Pilot [HTDV-480p]", None),
    ("Series Title - S01E01 - Pilot [HTDV-720p]", None),
    ("Series Title - S01E01 - Pilot [HTDV-1080p]", None),
    ("The.Series.Title.S04E13.720p.WEB-DL.AAC2.0.H.264-Cyphanix", Some("Cyphanix")),
    ("Series.S02E01.720p.WEB-DL.DD5.1.H.264.mkv", None),
    ("Series Title S01E01 Episode Title", None),
    ("The Series Title - 2014-06-02 - Thomas Piketty.mkv", None),
    ("The Series Title S12E17 May 23, 2014.mp4", None),
    (
        "Reizen Waes - S01E08 - Transistri\\u00EB, Zuid-Osseti\\u00EB en Abchazi\\u00EB SDTV.avi",
        None,
    ),
    ("The Series Title 10x11 - Wild Devs Cant Be Broken [rl].avi", Some("rl")),
    ("[ www.Torrenting.com ] - Series.S03E14.720p.HDTV.X264-DIMENSION", Some("DIMENSION")),
    ("Series S02E09 HDTV x264-2HD [eztv]-[rarbg.com]", Some("2HD")),
    ("7s-Series-s02e01-720p.mkv", None),
    ("The.Series.S09E13.720p.HEVC.x265-MeGusta-Pre", Some("MeGusta")),
    ("Series Title - S01E01 - Episode Title [RlsGroup]", Some("RlsGroup")),
    ("Red Series S01 E01-E02 1080p AMZN WEBRip DDP5.1 x264 monkee", None),
    ("Series.Title.S01E05.The-Aniversary.WEBDL-1080p.mkv", None),
    ("Series.Title.S01E05.The-Aniversary.HDTV-1080p.mkv", None),
    ("Series US (2010) S04 (1080p BDRip x265 10bit DTS-HD MA 5 1 - WEM)[TAoE]", Some("TAoE")),
    ("The.Series.S03E04.2160p.Amazon.WEBRip.DTS-HD.MA.5.1.x264", None),
    ("SomeShow.S20E13.1080p.BluRay.DTS-X.MA.5.1.x264", None),
    ("SomeShow.S20E13.1080p.BluRay.DTS-MA.5.1.x264", None),
    ("SomeShow.S20E13.1080p.BluRay.DTS-ES.5.1.x264", None),
    ("SomeShow.S20E13.1080p.Blu-Ray.DTS-ES.5.1.x264", None),
    ("SomeShow.S20E13.1080p.Blu-Ray.DTS-ES.5.1.x264-ROUGH [PublicHD]", Some("ROUGH")),
    ("SomeShow S01E168 1080p WEB-DL AAC 2.0 x264-Erai-raws", Some("Erai-raws")),
    (
        "The.Good.Series.S05E03.Series.of.Intelligence.1080p.10bit.AMZN.WEB-DL.DDP5.1.HEVC-Vyndros",
        Some("Vyndros"),
    ),
    ("[Tenrai-Sensei] Series [BD][1080p][HEVC 10bit x265][Dual Audio]", Some("Tenrai-Sensei")),
    ("[Erai-raws] Series - 0955 ~ 1005 [1080p]", Some("Erai-raws")),
    ("[Exiled-Destiny] Series Title", Some("Exiled-Destiny")),
    ("Series.Title.S01E09.1080p.DSNP.WEB-DL.DDP2.0.H.264-VARYG", Some("VARYG")),
    (
        "Series (1997) - S01E01-02 - Children of the Gods (Showtime) (1080p.BD.DD5.1.x265-TheSickle[TAoE])",
        Some("TAoE"),
    ),
    (
        "Series Title S01 [2160p REMUX] [HEVC DV HYBRID HDR10+ Dolby TrueHD Atmos 7 1 24-bit Audio English] [Data Lass]",
        None,
    ),
    (
        "Series Title S01 [2160p REMUX] [HEVC DV HYBRID HDR10+ Dolby TrueHD Atmos 7 1 24-bit Audio English]-DataLass",
        Some("DataLass"),
    ),
    ("Series Title S01 REMUX Dual Audio AVC 1080p 8-Bit-ZR-", Some("ZR")),
    ("Show.Name.2009.S01.1080p.BluRay.DTS5.1.x264-D-Z0N3", Some("D-Z0N3")),
    ("Show.Name.S01E01.1080p.WEB-DL.H264.Fight-BB.mkv", Some("Fight-BB")),
    (
        "Show Name (2021) Season 1 S01 (1080p BluRay x265 HEVC 10bit AAC 5.1 Tigole) [QxR]",
        Some("Tigole"),
    ),
    (
        "Show Name (2021) Season 1 S01 (1080p BluRay x265 HEVC 10bit AAC 2.0 afm72) [QxR]",
        Some("afm72"),
    ),
    (
        "Show Name (2021) Season 1 S01 (1080p DSNP WEB-DL x265 HEVC 10bit EAC3 5.1 Silence) [QxR]",
        Some("Silence"),
    ),
    (
        "Show Name (2021) Season 1 S01 (1080p BluRay x265 HEVC 10bit AAC 2.0 Panda) [QxR]",
        Some("Panda"),
    ),
    (
        "Show Name (2020) Season 1 S01 (1080p AMZN WEB-DL x265 HEVC 10bit EAC3 2.0 Ghost) [QxR]",
        Some("Ghost"),
    ),
    (
        "Show Name (2020) Season 1 S01 (1080p WEB-DL x265 HEVC 10bit AC3 5.1 MONOLITH) [QxR]",
        Some("MONOLITH"),
    ),
    ("The Show S08E09 The Series.1080p.AMZN.WEB-DL.x265.10bit.EAC3.6.0-Qman[UTR]", Some("UTR")),
    ("The Show S03E07 Fire and Series[1080p x265 10bit S87 Joy]", Some("Joy")),
    ("The Show (2016) - S02E01 - Soul Series #1 (1080p NF WEBRip x265 ImE)", Some("ImE")),
    (
        "The Show (2020) - S02E03 - Fighting His Series(1080p ATVP WEB-DL x265 t3nzin)",
        Some("t3nzin"),
    ),
    (
        "[Anime Time] A Show [BD][Dual Audio][1080p][HEVC 10bit x265][AAC][Eng Sub] [Batch] Title)",
        Some("Anime Time"),
    ),
    ("[Project Angel] Anime Series [DVD 480p] [10-bit x265 HEVC | Opus]", Some("Project Angel")),
    ("[Hakata Ramen] Show Title - Season 2 - Revival of The Commandments", Some("Hakata Ramen")),
    (
        "Show Name (2022) S01 (2160p DSNP WEB-DL H265 DV HDR DDP Atmos 5.1 English - HONE)",
        Some("HONE"),
    ),
    (
        "Show Title (2021) S01 (2160p ATVP WEB-DL Hybrid H265 DV HDR10+ DDP Atmos 5.1 English - HONE)",
        Some("HONE"),
    ),
    (
        "Series.Title.S01E09.1080p.DSNP.WEB-DL.DDP2.0.H.264-VARYG (Blue Lock, Multi-Subs)",
        Some("VARYG"),
    ),
    (
        "Series.Title (2014) S09E10 (1080p AMZN WEB-DL x265 HEVC 10bit DDP 5.1 Vyndros)",
        Some("Vyndros"),
    ),
    ("Series Title S02E03 Title 4k to 1080p DSNP WEBrip x265 DDP 5 1 Releaser[SEV]", Some("SEV")),
    (
        "Series Title Season 01 S01 1080p AMZN UHD WebRip x265 DDP 5.1 Atmos Releaser-SEV",
        Some("SEV"),
    ),
    (
        "Series Title - S01.E06 - Title 1080p AMZN WebRip x265 DDP 5.1 Atmos Releaser [SEV]",
        Some("SEV"),
    ),
    (
        "Series Title (2005) - S01E01 - A Hard Day's Night (1080p DSNP WEB-DL x265 Garshasp).mkv",
        Some("Garshasp"),
    ),
    ("Series Title (2015) - S02E04 - Smoke & Mirrors (1080p BluRay x265 Kappa).mkv", Some("Kappa")),
    ("Series Title (2020) - S02E03 - A Great Odyssey (1080p BluRay x265 Kappa).mkv", Some("Kappa")),
    ("Series Title (2019) - S01E01 - Episode 1 (1080p WEB-DL x265 Natty).mkv", Some("Natty")),
    (
        "Series Title (1999) - S03E01-E02 - Mermaid Man and Barnacle Boy IV & Doing Time (1080p AMZN WEB-DL x265 RCVR).mkv",
        Some("RCVR"),
    ),
    (
        "Series Title (2021) - S01E02 - Here Goes Nothing (1080p WEB-DL x265 SAMPA).mkv",
        Some("SAMPA"),
    ),
    ("Series Title (2021) - S01E01 - Aftermath (1080p DSNP WEB-DL x265 YOGI).mkv", Some("YOGI")),
    ("Series Title (2012) - S01E01 - Episode 1 (1080p BluRay x265 r00t).mkv", Some("r00t")),
    ("Series Title - S01E01 - Girls Gone Wild Exposed (720p x265 EDGE2020).mkv", Some("EDGE2020")),
    ("Series.Title.S01E02.1080p.BluRay.Remux.AVC.FLAC.2.0-E.N.D", Some("E.N.D")),
    (
        "Show Name (2016) Season 1 S01 (1080p AMZN WEB-DL x265 HEVC 10bit EAC3 5 1 RZeroX) QxR",
        Some("RZeroX"),
    ),
    ("Series Title S01 1080p Blu-ray Remux AVC FLAC 2.0 - KRaLiMaRKo", Some("KRaLiMaRKo")),
    ("Series Title S01 1080p Blu-ray Remux AVC DTS-HD MA 2.0 - BluDragon", Some("BluDragon")),
    ("Example (2013) S01E01 (1080p iP WEBRip x265 SDR AAC 2.0 English - DarQ)", Some("DarQ")),
    ("Series.Title.S08E03.720p.WEB.DL.AAC2.0.H.264.KCRT", Some("KCRT")),
    (
        "Series Title S02E05 2160p WEB-DL DV HDR ENG DDP5.1 Atmos H265 MP4-BEN THE MEN",
        Some("BEN THE MEN"),
    ),
    (
        "Series Title S02E05 2160p AMZN WEB-DL DV HDR10 PLUS DDP5 1 Atmos H265 MKV-BEN THE MEN-xpost",
        Some("BEN THE MEN"),
    ),
    ("Series.S01E05.1080p.WEB-DL.DDP5.1.H264-BEN.THE.MEN", Some("BEN.THE.MEN")),
    ("Series (2022) S01 (1080p BluRay x265 SDR DDP 5.1 English - JBENT TAoE)", Some("TAoE")),
    ("Series (2005) S21E12 (1080p AMZN WEB-DL x265 SDR DDP 5.1 English - Goki TAoE)", Some("TAoE")),
    ("Series.Title.S02E04.720p.WEBRip.x264-SKGTV English", Some("SKGTV")),
    ("Series.Title.S02E04.720p.WEBRip.x264-SKGTV_English", Some("SKGTV")),
    ("Series.Title.S02E04.720p.WEBRip.x264-SKGTV.English", Some("SKGTV")),
    ("Series.Title.S02E04.720p.WEB-DL.AAC2.0.H.264-EVL-RP", Some("EVL")),
    ("Series.Title.S02E04.720p.WEB-DL.AAC2.0.H.264-EVL-RP-RP", Some("EVL")),
    ("Series.Title.S02E04.720p.WEB-DL.AAC2.0.H.264-EVL-Obfuscated", Some("EVL")),
    ("Series.Title.S04E04.720p.BluRay.x264-xHD-NZBgeek", Some("xHD")),
    ("Series.Title.S05E11.720p.HDTV.X264-DIMENSION-NZBgeek", Some("DIMENSION")),
    ("Series.Title.S04E04.720p.BluRay.x264-xHD-1", Some("xHD")),
    ("Series.Title.S05E11.720p.HDTV.X264-DIMENSION-1", Some("DIMENSION")),
    ("series.title.s40e11.kevin.hart_sia.720p.hdtv.x264-w4f-sample.mkv", Some("w4f")),
    ("The.Series.2017.S05E02.1080p.WEB-DL.DD5.1.H264-EVL-Scrambled", Some("EVL")),
    ("Series.S01E08.Haunted.Hayride.720p.AMZN.WEBRip.DDP5.1.x264-NTb-postbot", Some("NTb")),
    ("Series.S01E08.Haunted.Hayride.720p.AMZN.WEBRip.DDP5.1.x264-NTb-xpost", Some("NTb")),
    ("Series.Title.S08E05.The.Forgotten.1080p.AMZN.WEB-DL.DDP5.1.H.264-NTb-Rakuv", Some("NTb")),
    ("The.Series.S30E01.Devs.Not.Dead.1080p.AMZN.WEB-DL.DDP5.1.H264-QOQ-Rakuv02", Some("QOQ")),
    ("Lie.To.Developers.S01E13.720p.BluRay.x264-SiNNERS-Rakuvfinhel", Some("SiNNERS")),
    ("Who.is.Sonarr.S01E01.INTERNAL.720p.HDTV.x264-aAF-RakuvUS-Obfuscated", Some("aAF")),
    (
        "Deadly.Development.S01E10.Sink.With.Code.1080p.AMZN.WEB-DL.DDP5.1.H.264-NTG-WhiteRev",
        Some("NTG"),
    ),
    (
        "The.Sonarr.Series.S09E12.Developers.REPACK.1080p.AMZN.WEB-DL.DD.5.1.H.264-CasStudio-BUYMORE",
        Some("CasStudio"),
    ),
    (
        "2.Tired.Developers.S02E24.1080p.AMZN.WEBRip.DD5.1.x264-CasStudio-AsRequested",
        Some("CasStudio"),
    ),
    ("Series.S04E11.Lines.1080p.AMZN.WEB-DL.DDP5.1.H.264-NTb-AlternativeToRequested", Some("NTb")),
    ("Series.S16E04.Third.Wheel.1080p.AMZN.WEB-DL.DDP5.1.H.264-NTb-GEROV", Some("NTb")),
    ("Series.and.Title.S10E06.Dev.n.Play.1080p.AMZN.WEB-DL.DDP5.1.H.264-NTb-Z0iDS3N", Some("NTb")),
    ("Absolute.Series.S02E06.The.House.of.Sonarr.DVDRip.x264-MaG-Chamele0n", Some("MaG")),
    ("The.Series.Title.S08E08.1080p.BluRay.x264-ROVERS-4P", Some("ROVERS")),
    ("Series.Title.S01E02.720p.BluRay.X264-REWARD-4Planet", Some("REWARD")),
    ("Series.S01E01.Rites.of.Passage.1080p.BluRay.x264-DON-AlteZachen", Some("DON")),
    ("Series.Title.S04E06.Episode.Name.720p.WEB-DL.DD5.1.H.264-HarrHD-RePACKPOST", Some("HarrHD")),
    ("[FFF] Series Title!! - S01E11 - Someday, With Sonarr", Some("FFF")),
    ("[HorribleSubs] Series Title!! - S01E12 - Sonarr Going Well!!", Some("HorribleSubs")),
    ("[Anime-Koi] Series Title - S01E06 - Guys From Sonarr", Some("Anime-Koi")),
    ("[Anime-Koi] Series Title - S01E07 - A High-Grade Sonarr", Some("Anime-Koi")),
    ("[Anime-Koi] Series Title 2 - 01 [h264-720p][28D54E2C]", Some("Anime-Koi")),
    ("Terrible.Anime.Title.001.DBOX.480p.x264-iKaos [v3] [6AFFEF6B]", None),
];

struct Golden {
    title: &'static str,
    series: &'static str,
    season: u32,
    episodes: &'static [u32],
    group: Option<&'static str>,
}

const GOLDEN: &[Golden] = &[
    Golden {
        title: "Series.Title.S02E04.720p.WEB-DL.AAC2.0.H.264-EVL-RP",
        series: "Series Title",
        season: 2,
        episodes: &[4],
        group: Some("EVL"),
    },
    Golden {
        title: "Series.Title.S01E05.720p.HDTV.x264-DIMENSION.mkv",
        series: "Series Title",
        season: 1,
        episodes: &[5],
        group: Some("DIMENSION"),
    },
    Golden {
        title: "Series.Title.S01E01-E03.720p.HDTV.x264-LOL",
        series: "Series Title",
        season: 1,
        episodes: &[1, 2, 3],
        group: Some("LOL"),
    },
    Golden {
        title: "Series.Title.S01E01E02.720p.HDTV.x264-LOL",
        series: "Series Title",
        season: 1,
        episodes: &[1, 2],
        group: Some("LOL"),
    },
    Golden {
        title: "Series.Title.S04E04.720p.BluRay.x264-xHD-NZBgeek-RP",
        series: "Series Title",
        season: 4,
        episodes: &[4],
        group: Some("xHD"),
    },
    Golden {
        title: "Series.S01E02.720p.HDTV.x264-KOGi-4P",
        series: "Series",
        season: 1,
        episodes: &[2],
        group: Some("KOGi"),
    },
    Golden {
        title: "Series.Title.4x05.HDTV.XviD-LOL",
        series: "Series Title",
        season: 4,
        episodes: &[5],
        group: Some("LOL"),
    },
    Golden {
        title: "series.2009.416.hdtv-lol",
        series: "series 2009",
        season: 4,
        episodes: &[16],
        group: Some("lol"),
    },
    Golden {
        title: "Series 2009 S01E14 English HDTV XviD LOL",
        series: "Series 2009",
        season: 1,
        episodes: &[14],
        group: None,
    },
];

#[test]
fn test_single_episode_titles() {
    let parser = parser();
    for &(title, series, season, episode) in SINGLE_EPISODES {
        let info = parser
            .parse_title(title)
            .unwrap_or_else(|| panic!("{} should parse", title));

        assert_eq!(info.series_title, series, "{}", title);
        assert_eq!(info.season_number, season, "{}", title);
        assert_eq!(info.episode_numbers, vec![episode], "{}", title);
        assert!(info.absolute_episode_numbers.is_empty(), "{}", title);
        assert!(!info.full_season, "{}", title);
    }
}

#[test]
fn test_release_group_titles() {
    let parser = parser();
    for &(title, group) in RELEASE_GROUPS {
        assert_eq!(parser.parse_release_group(title).as_deref(), group, "{}", title);
    }
}

#[test]
fn test_golden_table() {
    let parser = parser();
    for golden in GOLDEN {
        let info = parser
            .parse_title(golden.title)
            .unwrap_or_else(|| panic!("{} should parse", golden.title));

        assert_eq!(info.series_title, golden.series, "{}", golden.title);
        assert_eq!(info.season_number, golden.season, "{}", golden.title);
        assert_eq!(info.episode_numbers, golden.episodes, "{}", golden.title);
        assert_eq!(info.release_group.as_deref(), golden.group, "{}", golden.title);
        assert!(!info.special && !info.is_split_episode, "{}", golden.title);
    }
}

#[test]
fn test_special_decimal_episode() {
    let info = parser()
        .parse_title("Series Title S01E11.5 [SP]-The Poppies Bloom Red on the Battlefield")
        .unwrap();
    assert_eq!(info.season_number, 1);
    assert_eq!(info.episode_numbers, vec![11]);
    assert!(info.special);
    assert!(!info.is_split_episode);
}

#[test]
fn test_split_episode() {
    let title = "Series.Title.S06E01b.Fade.Out.Fade.in.Part.2.1080p.DSNP.WEB-DL.AAC2.0.H.264-FLUX";
    let info = parser().parse_title(title).unwrap();
    assert_eq!(info.season_number, 6);
    assert_eq!(info.episode_numbers, vec![1]);
    assert!(info.is_split_episode);
}

#[test]
fn test_full_season() {
    let info = parser().parse_title("Show.S01.DISC-1.1080p.BluRay").unwrap();
    assert!(info.full_season);
    assert_eq!(info.season_number, 1);
    assert!(info.episode_numbers.is_empty());
}

#[test]
fn test_daily() {
    let info = parser().parse_title("2020.Series.2011.12.02.PDTV.XviD-C4TV").unwrap();
    assert_eq!(info.series_title, "2020 Series");
    assert!(info.is_daily());
    assert!(info.episode_numbers.is_empty());
}

#[test]
fn test_absolute() {
    let info = parser()
        .parse_title("[SubsPlease] Jujutsu Kaisen - 24 (1080p) [A1B2C3D4].mkv")
        .unwrap();
    assert_eq!(info.series_title, "Jujutsu Kaisen");
    assert_eq!(info.absolute_episode_numbers, vec![24]);
    assert_eq!(info.release_group.as_deref(), Some("SubsPlease"));
}

#[test]
fn test_unparseable_returns_none() {
    let parser = parser();
    for title in [
        "",
        "   ",
        "Just Some Words",
        "S01.720p.HDTV",
        "Series.Title.S01E01-E99999",
    ] {
        assert!(parser.parse_title(title).is_none(), "{:?}", title);
    }
}

#[test]
fn test_release_group_rejections() {
    let parser = parser();
    assert_eq!(parser.parse_release_group("Series.Title.S01E01.720p.HDTV-English"), None);
    assert_eq!(parser.parse_release_group(""), None);
}

#[test]
fn test_quality_and_revision() {
    let info = parser()
        .parse_title("Series.Title.S01E01.REAL.PROPER.720p.HDTV.x264-GRP")
        .unwrap();
    assert_eq!(info.quality.quality, Quality::HDTV720p);
    assert_eq!(info.quality.revision.version, 2);
    assert_eq!(info.quality.revision.real, 1);
    assert_eq!(info.languages, vec![Language::Unknown]);
}

#[test]
fn test_canonical_title_parses_back() {
    let parser = parser();
    for title in [
        "Series.Title.S01E05.720p.HDTV.x264-DIMENSION",
        "Series.Title.S01E01.PROPER.720p.HDTV.x264-GRP",
        "Series.Title.S02E04.1080p.WEB-DL.AAC2.0.H.264-EVL",
        "Series.Title.S01E01-E03.720p.HDTV.x264-LOL",
    ] {
        let first = parser.parse_title(title).unwrap();
        let canonical = first.canonical_title();
        let second = parser
            .parse_title(&canonical)
            .unwrap_or_else(|| panic!("{} should parse", canonical));

        assert_eq!(second.series_title, first.series_title, "{}", canonical);
        assert_eq!(second.season_number, first.season_number, "{}", canonical);
        assert_eq!(second.episode_numbers, first.episode_numbers, "{}", canonical);
        assert_eq!(second.quality, first.quality, "{}", canonical);
        assert_eq!(second.release_group, first.release_group, "{}", canonical);
    }
}
