//! Standard colour-name table: the Name-That-Color list.
//!
//! Display names carry spaces and the odd punctuation (`"Robin's Egg Blue"`,
//! `"Cyan / Aqua"`); [`super::color::slugify`] turns them into hyphenated
//! identifiers. Lookups return the first entry on ties.

/// `(display name, 0xRRGGBB)` pairs, ordered by value.
pub static COLOR_NAMES: &[(&str, u32)] = &[
    ("Black", 0x000000),
    ("Navy Blue", 0x000080),
    ("Dark Blue", 0x0000C8),
    ("Blue", 0x0000FF),
    ("Stratos", 0x000741),
    ("Swamp", 0x001B1C),
    ("Resolution Blue", 0x002387),
    ("Deep Fir", 0x002900),
    ("Burnham", 0x002E20),
    ("International Klein Blue", 0x002FA7),
    ("Prussian Blue", 0x003153),
    ("Midnight Blue", 0x003366),
    ("Smalt", 0x003399),
    ("Deep Teal", 0x003532),
    ("Cyprus", 0x003E40),
    ("Kaitoke Green", 0x004620),
    ("Cobalt", 0x0047AB),
    ("Crusoe", 0x004816),
    ("Sherpa Blue", 0x004950),
    ("Endeavour", 0x0056A7),
    ("Camarone", 0x00581A),
    ("Science Blue", 0x0066CC),
    ("Blue Ribbon", 0x0066FF),
    ("Tropical Rain Forest", 0x00755E),
    ("Allports", 0x0076A3),
    ("Deep Cerulean", 0x007BA7),
    ("Lochmara", 0x007EC7),
    ("Azure Radiance", 0x007FFF),
    ("Teal", 0x008080),
    ("Bondi Blue", 0x0095B6),
    ("Pacific Blue", 0x009DC4),
    ("Persian Green", 0x00A693),
    ("Jade", 0x00A86B),
    ("Caribbean Green", 0x00CC99),
    ("Robin's Egg Blue", 0x00CCCC),
    ("Green", 0x00FF00),
    ("Spring Green", 0x00FF7F),
    ("Cyan / Aqua", 0x00FFFF),
    ("Blue Charcoal", 0x010D1A),
    ("Midnight", 0x011635),
    ("Holly", 0x011D13),
    ("Daintree", 0x012731),
    ("Cardin Green", 0x01361C),
    ("County Green", 0x01371A),
    ("Astronaut Blue", 0x013E62),
    ("Regal Blue", 0x013F6A),
    ("Aqua Deep", 0x014B43),
    ("Orient", 0x015E85),
    ("Blue Stone", 0x016162),
    ("Fun Green", 0x016D39),
    ("Pine Green", 0x01796F),
    ("Blue Lagoon", 0x017987),
    ("Deep Sea", 0x01826B),
    ("Green Haze", 0x01A368),
    ("English Holly", 0x022D15),
    ("Sherwood Green", 0x02402C),
    ("Congress Blue", 0x02478E),
    ("Evening Sea", 0x024E46),
    ("Bahama Blue", 0x026395),
    ("Observatory", 0x02866F),
    ("Cerulean", 0x02A4D3),
    ("Tangaroa", 0x03163C),
    ("Green Vogue", 0x032B52),
    ("Mosque", 0x036A6E),
    ("Midnight Moss", 0x041004),
    ("Black Pearl", 0x041322),
    ("Blue Whale", 0x042E4C),
    ("Zuccini", 0x044022),
    ("Teal Blue", 0x044259),
    ("Deep Cove", 0x051040),
    ("Gulf Blue", 0x051657),
    ("Venice Blue", 0x055989),
    ("Watercourse", 0x056F57),
    ("Catalina Blue", 0x062A78),
    ("Tiber", 0x063537),
    ("Gossamer", 0x069B81),
    ("Niagara", 0x06A189),
    ("Tarawera", 0x073A50),
    ("Jaguar", 0x080110),
    ("Black Bean", 0x081910),
    ("Deep Sapphire", 0x082567),
    ("Elf Green", 0x088370),
    ("Bright Turquoise", 0x08E8DE),
    ("Downriver", 0x092256),
    ("Palm Green", 0x09230F),
    ("Madison", 0x09255D),
    ("Bottle Green", 0x093624),
    ("Deep Sea Green", 0x095859),
    ("Salem", 0x097F4B),
    ("Black Russian", 0x0A001C),
    ("Dark Fern", 0x0A480D),
    ("Japanese Laurel", 0x0A6906),
    ("Atoll", 0x0A6F75),
    ("Cod Gray", 0x0B0B0B),
    ("Marshland", 0x0B0F08),
    ("Gordons Green", 0x0B1107),
    ("Black Forest", 0x0B1304),
    ("San Felix", 0x0B6207),
    ("Malachite", 0x0BDA51),
    ("Ebony", 0x0C0B1D),
    ("Woodsmoke", 0x0C0D0F),
    ("Racing Green", 0x0C1911),
    ("Surfie Green", 0x0C7A79),
    ("Blue Chill", 0x0C8990),
    ("Black Rock", 0x0D0332),
    ("Bunker", 0x0D1117),
    ("Aztec", 0x0D1C19),
    ("Bush", 0x0D2E1C),
    ("Cinder", 0x0E0E18),
    ("Firefly", 0x0E2A30),
    ("Torea Bay", 0x0F2D9E),
    ("Vulcan", 0x10121D),
    ("Green Waterloo", 0x101405),
    ("Eden", 0x105852),
    ("Arapawa", 0x110C6C),
    ("Ultramarine", 0x120A8F),
    ("Elephant", 0x123447),
    ("Jewel", 0x126B40),
    ("Diesel", 0x130000),
    ("Asphalt", 0x130A06),
    ("Blue Zodiac", 0x13264D),
    ("Parsley", 0x134F19),
    ("Nero", 0x140600),
    ("Tory Blue", 0x1450AA),
    ("Bunting", 0x151F4C),
    ("Denim", 0x1560BD),
    ("Genoa", 0x15736B),
    ("Mirage", 0x161928),
    ("Hunter Green", 0x161D10),
    ("Big Stone", 0x162A40),
    ("Celtic", 0x163222),
    ("Timber Green", 0x16322C),
    ("Gable Green", 0x163531),
    ("Pine Tree", 0x171F04),
    ("Chathams Blue", 0x175579),
    ("Deep Forest Green", 0x182D09),
    ("Blumine", 0x18587A),
    ("Palm Leaf", 0x19330E),
    ("Nile Blue", 0x193751),
    ("Fun Blue", 0x1959A8),
    ("Lucky Point", 0x1A1A68),
    ("Mountain Meadow", 0x1AB385),
    ("Tolopea", 0x1B0245),
    ("Haiti", 0x1B1035),
    ("Deep Koamaru", 0x1B127B),
    ("Acadia", 0x1B1404),
    ("Seaweed", 0x1B2F11),
    ("Biscay", 0x1B3162),
    ("Matisse", 0x1B659D),
    ("Crowshead", 0x1C1208),
    ("Rangoon Green", 0x1C1E13),
    ("Persian Blue", 0x1C39BB),
    ("Everglade", 0x1C402E),
    ("Elm", 0x1C7C7D),
    ("Green Pea", 0x1D6142),
    ("Creole", 0x1E0F04),
    ("Karaka", 0x1E1609),
    ("El Paso", 0x1E1708),
    ("Cello", 0x1E385B),
    ("Te Papa Green", 0x1E433C),
    ("Dodger Blue", 0x1E90FF),
    ("Eastern Blue", 0x1E9AB0),
    ("Night Rider", 0x1F120F),
    ("Java", 0x1FC2C2),
    ("Jacksons Purple", 0x20208D),
    ("Cloud Burst", 0x202E54),
    ("Blue Dianne", 0x204852),
    ("Eternity", 0x211A0E),
    ("Deep Blue", 0x220878),
    ("Forest Green", 0x228B22),
    ("Mallard", 0x233418),
    ("Violet", 0x240A40),
    ("Kilamanjaro", 0x240C02),
    ("Log Cabin", 0x242A1D),
    ("Black Olive", 0x242E16),
    ("Green House", 0x24500F),
    ("Graphite", 0x251607),
    ("Cannon Black", 0x251706),
    ("Port Gore", 0x251F4F),
    ("Shark", 0x25272C),
    ("Green Kelp", 0x25311C),
    ("Curious Blue", 0x2596D1),
    ("Paua", 0x260368),
    ("Paris M", 0x26056A),
    ("Wood Bark", 0x261105),
    ("Gondola", 0x261414),
    ("Steel Gray", 0x262335),
    ("Ebony Clay", 0x26283B),
    ("Bay of Many", 0x273A81),
    ("Plantation", 0x27504B),
    ("Eucalyptus", 0x278A5B),
    ("Oil", 0x281E15),
    ("Astronaut", 0x283A77),
    ("Mariner", 0x286ACD),
    ("Violent Violet", 0x290C5E),
    ("Bastille", 0x292130),
    ("Zeus", 0x292319),
    ("Charade", 0x292937),
    ("Jelly Bean", 0x297B9A),
    ("Jungle Green", 0x29AB87),
    ("Cherry Pie", 0x2A0359),
    ("Coffee Bean", 0x2A140E),
    ("Baltic Sea", 0x2A2630),
    ("Turtle Green", 0x2A380B),
    ("Cerulean Blue", 0x2A52BE),
    ("Sepia Black", 0x2B0202),
    ("Valhalla", 0x2B194F),
    ("Heavy Metal", 0x2B3228),
    ("Blue Gem", 0x2C0E8C),
    ("Revolver", 0x2C1632),
    ("Bleached Cedar", 0x2C2133),
    ("Lochinvar", 0x2C8C84),
    ("Mikado", 0x2D2510),
    ("Outer Space", 0x2D383A),
    ("St Tropaz", 0x2D569B),
    ("Jacaranda", 0x2E0329),
    ("Jacko Bean", 0x2E1905),
    ("Rangitoto", 0x2E3222),
    ("Rhino", 0x2E3F62),
    ("Sea Green", 0x2E8B57),
    ("Scooter", 0x2EBFD4),
    ("Onion", 0x2F270E),
    ("Governor Bay", 0x2F3CB3),
    ("Sapphire", 0x2F519E),
    ("Spectra", 0x2F5A57),
    ("Casal", 0x2F6168),
    ("Melanzane", 0x300529),
    ("Cocoa Brown", 0x301F1E),
    ("Woodrush", 0x302A0F),
    ("San Juan", 0x304B6A),
    ("Turquoise", 0x30D5C8),
    ("Eclipse", 0x311C17),
    ("Pickled Bluewood", 0x314459),
    ("Azure", 0x315BA1),
    ("Calypso", 0x31728D),
    ("Paradiso", 0x317D82),
    ("Persian Indigo", 0x32127A),
    ("Blackcurrant", 0x32293A),
    ("Mine Shaft", 0x323232),
    ("Stromboli", 0x325D52),
    ("Bilbao", 0x327C14),
    ("Astral", 0x327DA0),
    ("Christalle", 0x33036B),
    ("Thunder", 0x33292F),
    ("Shamrock", 0x33CC99),
    ("Tamarind", 0x341515),
    ("Mardi Gras", 0x350036),
    ("Valentino", 0x350E42),
    ("Jagger", 0x350E57),
    ("Tuna", 0x353542),
    ("Chambray", 0x354E8C),
    ("Martinique", 0x363050),
    ("Tuatara", 0x363534),
    ("Waiouru", 0x363C0D),
    ("Ming", 0x36747D),
    ("La Palma", 0x368716),
    ("Chocolate", 0x370202),
    ("Clinker", 0x371D09),
    ("Brown Tumbleweed", 0x37290E),
    ("Birch", 0x373021),
    ("Oracle", 0x377475),
    ("Blue Diamond", 0x380474),
    ("Grape", 0x381A51),
    ("Dune", 0x383533),
    ("Oxford Blue", 0x384555),
    ("Clover", 0x384910),
    ("Limed Spruce", 0x394851),
    ("Dell", 0x396413),
    ("Toledo", 0x3A0020),
    ("Sambuca", 0x3A2010),
    ("Jacarta", 0x3A2A6A),
    ("William", 0x3A686C),
    ("Killarney", 0x3A6A47),
    ("Keppel", 0x3AB09E),
    ("Temptress", 0x3B000B),
    ("Aubergine", 0x3B0910),
    ("Jon", 0x3B1F1F),
    ("Treehouse", 0x3B2820),
    ("Amazon", 0x3B7A57),
    ("Boston Blue", 0x3B91B4),
    ("Windsor", 0x3C0878),
    ("Rebel", 0x3C1206),
    ("Meteorite", 0x3C1F76),
    ("Dark Ebony", 0x3C2005),
    ("Camouflage", 0x3C3910),
    ("Bright Gray", 0x3C4151),
    ("Cape Cod", 0x3C4443),
    ("Lunar Green", 0x3C493A),
    ("Bean", 0x3D0C02),
    ("Bistre", 0x3D2B1F),
    ("Goblin", 0x3D7D52),
    ("Kingfisher Daisy", 0x3E0480),
    ("Cedar", 0x3E1C14),
    ("English Walnut", 0x3E2B23),
    ("Black Marlin", 0x3E2C1C),
    ("Ship Gray", 0x3E3A44),
    ("Pelorous", 0x3EABBF),
    ("Bronze", 0x3F2109),
    ("Cola", 0x3F2500),
    ("Madras", 0x3F3002),
    ("Minsk", 0x3F307F),
    ("Cabbage Pont", 0x3F4C3A),
    ("Tom Thumb", 0x3F583B),
    ("Mineral Green", 0x3F5D53),
    ("Puerto Rico", 0x3FC1AA),
    ("Harlequin", 0x3FFF00),
    ("Brown Pod", 0x401801),
    ("Cork", 0x40291D),
    ("Masala", 0x403B38),
    ("Thatch Green", 0x403D19),
    ("Fiord", 0x405169),
    ("Viridian", 0x40826D),
    ("Chateau Green", 0x40A860),
    ("Ripe Plum", 0x410056),
    ("Paco", 0x411F10),
    ("Deep Oak", 0x412010),
    ("Merlin", 0x413C37),
    ("Gun Powder", 0x414257),
    ("East Bay", 0x414C7D),
    ("Royal Blue", 0x4169E1),
    ("Ocean Green", 0x41AA78),
    ("Burnt Maroon", 0x420303),
    ("Lisbon Brown", 0x423921),
    ("Faded Jade", 0x427977),
    ("Scarlet Gum", 0x431560),
    ("Iroko", 0x433120),
    ("Armadillo", 0x433E37),
    ("River Bed", 0x434C59),
    ("Green Leaf", 0x436A0D),
    ("Barossa", 0x44012D),
    ("Morocco Brown", 0x441D00),
    ("Mako", 0x444954),
    ("Kelp", 0x454936),
    ("San Marino", 0x456CAC),
    ("Picton Blue", 0x45B1E8),
    ("Loulou", 0x460B41),
    ("Crater Brown", 0x462425),
    ("Gray Asparagus", 0x465945),
    ("Steel Blue", 0x4682B4),
    ("Rustic Red", 0x480404),
    ("Bulgarian Rose", 0x480607),
    ("Clairvoyant", 0x480656),
    ("Cocoa Bean", 0x481C1C),
    ("Woody Brown", 0x483131),
    ("Taupe", 0x483C32),
    ("Van Cleef", 0x49170C),
    ("Brown Derby", 0x492615),
    ("Metallic Bronze", 0x49371B),
    ("Verdun Green", 0x495400),
    ("Blue Bayoux", 0x496679),
    ("Bismark", 0x497183),
    ("Bracken", 0x4A2A04),
    ("Deep Bronze", 0x4A3004),
    ("Mondo", 0x4A3C30),
    ("Tundora", 0x4A4244),
    ("Gravel", 0x4A444B),
    ("Trout", 0x4A4E5A),
    ("Pigment Indigo", 0x4B0082),
    ("Nandor", 0x4B5D52),
    ("Saddle", 0x4C3024),
    ("Abbey", 0x4C4F56),
    ("Blackberry", 0x4D0135),
    ("Cab Sav", 0x4D0A18),
    ("Indian Tan", 0x4D1E01),
    ("Cowboy", 0x4D282D),
    ("Livid Brown", 0x4D282E),
    ("Rock", 0x4D3833),
    ("Punga", 0x4D3D14),
    ("Bronzetone", 0x4D400F),
    ("Woodland", 0x4D5328),
    ("Mahogany", 0x4E0606),
    ("Bossanova", 0x4E2A5A),
    ("Matterhorn", 0x4E3B41),
    ("Bronze Olive", 0x4E420C),
    ("Mulled Wine", 0x4E4562),
    ("Axolotl", 0x4E6649),
    ("Wedgewood", 0x4E7F9E),
    ("Shakespeare", 0x4EABD1),
    ("Honey Flower", 0x4F1C70),
    ("Daisy Bush", 0x4F2398),
    ("Indigo", 0x4F69C6),
    ("Fern Green", 0x4F7942),
    ("Fruit Salad", 0x4F9D5D),
    ("Apple", 0x4FA83D),
    ("Mortar", 0x504351),
    ("Kashmir Blue", 0x507096),
    ("Cutty Sark", 0x507672),
    ("Emerald", 0x50C878),
    ("Emperor", 0x514649),
    ("Chalet Green", 0x516E3D),
    ("Como", 0x517C66),
    ("Smalt Blue", 0x51808F),
    ("Castro", 0x52001F),
    ("Maroon Oak", 0x520C17),
    ("Gigas", 0x523C94),
    ("Voodoo", 0x533455),
    ("Victoria", 0x534491),
    ("Hippie Green", 0x53824B),
    ("Heath", 0x541012),
    ("Judge Gray", 0x544333),
    ("Fuscous Gray", 0x54534D),
    ("Vida Loca", 0x549019),
    ("Cioccolato", 0x55280C),
    ("Saratoga", 0x555B10),
    ("Finlandia", 0x556D56),
    ("Havelock Blue", 0x5590D9),
    ("Fountain Blue", 0x56B4BE),
    ("Spring Leaves", 0x578363),
    ("Saddle Brown", 0x583401),
    ("Scarpa Flow", 0x585562),
    ("Cactus", 0x587156),
    ("Hippie Blue", 0x589AAF),
    ("Wine Berry", 0x591D35),
    ("Brown Bramble", 0x592804),
    ("Congo Brown", 0x593737),
    ("Millbrook", 0x594433),
    ("Waikawa Gray", 0x5A6E9C),
    ("Horizon", 0x5A87A0),
    ("Jambalaya", 0x5B3013),
    ("Bordeaux", 0x5C0120),
    ("Mulberry Wood", 0x5C0536),
    ("Carnaby Tan", 0x5C2E01),
    ("Comet", 0x5C5D75),
    ("Redwood", 0x5D1E0F),
    ("Don Juan", 0x5D4C51),
    ("Chicago", 0x5D5C58),
    ("Verdigris", 0x5D5E37),
    ("Dingley", 0x5D7747),
    ("Breaker Bay", 0x5DA19F),
    ("Kabul", 0x5E483E),
    ("Hemlock", 0x5E5D3B),
    ("Irish Coffee", 0x5F3D26),
    ("Mid Gray", 0x5F5F6E),
    ("Shuttle Gray", 0x5F6672),
    ("Aqua Forest", 0x5FA777),
    ("Tradewind", 0x5FB3AC),
    ("Horses Neck", 0x604913),
    ("Smoky", 0x605B73),
    ("Corduroy", 0x606E68),
    ("Danube", 0x6093D1),
    ("Espresso", 0x612718),
    ("Eggplant", 0x614051),
    ("Costa Del Sol", 0x615D30),
    ("Glade Green", 0x61845F),
    ("Buccaneer", 0x622F30),
    ("Quincy", 0x623F2D),
    ("Butterfly Bush", 0x624E9A),
    ("West Coast", 0x625119),
    ("Finch", 0x626649),
    ("Patina", 0x639A8F),
    ("Fern", 0x63B76C),
    ("Blue Violet", 0x6456B7),
    ("Dolphin", 0x646077),
    ("Storm Dust", 0x646463),
    ("Siam", 0x646A54),
    ("Nevada", 0x646E75),
    ("Cornflower Blue", 0x6495ED),
    ("Viking", 0x64CCDB),
    ("Rosewood", 0x65000B),
    ("Cherrywood", 0x651A14),
    ("Purple Heart", 0x652DC1),
    ("Fern Frond", 0x657220),
    ("Willow Grove", 0x65745D),
    ("Hoki", 0x65869F),
    ("Pompadour", 0x660045),
    ("Purple", 0x660099),
    ("Tyrian Purple", 0x66023C),
    ("Dark Tan", 0x661010),
    ("Silver Tree", 0x66B58F),
    ("Bright Green", 0x66FF00),
    ("Screamin' Green", 0x66FF66),
    ("Black Rose", 0x67032D),
    ("Scampi", 0x675FA6),
    ("Ironside Gray", 0x676662),
    ("Viridian Green", 0x678975),
    ("Christi", 0x67A712),
    ("Nutmeg Wood Finish", 0x683600),
    ("Zambezi", 0x685558),
    ("Salt Box", 0x685E6E),
    ("Tawny Port", 0x692545),
    ("Finn", 0x692D54),
    ("Scorpion", 0x695F62),
    ("Lynch", 0x697E9A),
    ("Spice", 0x6A442E),
    ("Himalaya", 0x6A5D1B),
    ("Soya Bean", 0x6A6051),
    ("Hairy Heath", 0x6B2A14),
    ("Royal Purple", 0x6B3FA0),
    ("Shingle Fawn", 0x6B4E31),
    ("Dorado", 0x6B5755),
    ("Bermuda Gray", 0x6B8BA2),
    ("Olive Drab", 0x6B8E23),
    ("Eminence", 0x6C3082),
    ("Turquoise Blue", 0x6CDAE7),
    ("Lonestar", 0x6D0101),
    ("Pine Cone", 0x6D5E54),
    ("Dove Gray", 0x6D6C6C),
    ("Juniper", 0x6D9292),
    ("Gothic", 0x6D92A1),
    ("Red Oxide", 0x6E0902),
    ("Moccaccino", 0x6E1D14),
    ("Pickled Bean", 0x6E4826),
    ("Dallas", 0x6E4B26),
    ("Kokoda", 0x6E6D57),
    ("Pale Sky", 0x6E7783),
    ("Cafe Royale", 0x6F440C),
    ("Flint", 0x6F6A61),
    ("Highland", 0x6F8E63),
    ("Limeade", 0x6F9D02),
    ("Downy", 0x6FD0C5),
    ("Persian Plum", 0x701C1C),
    ("Sepia", 0x704214),
    ("Antique Bronze", 0x704A07),
    ("Ferra", 0x704F50),
    ("Coffee", 0x706555),
    ("Slate Gray", 0x708090),
    ("Cedar Wood Finish", 0x711A00),
    ("Metallic Copper", 0x71291D),
    ("Affair", 0x714693),
    ("Studio", 0x714AB2),
    ("Tobacco Brown", 0x715D47),
    ("Yellow Metal", 0x716338),
    ("Peat", 0x716B56),
    ("Olivetone", 0x716E10),
    ("Storm Gray", 0x717486),
    ("Sirocco", 0x718080),
    ("Aquamarine Blue", 0x71D9E2),
    ("Venetian Red", 0x72010F),
    ("Old Copper", 0x724A2F),
    ("Go Ben", 0x726D4E),
    ("Raven", 0x727B89),
    ("Seance", 0x731E8F),
    ("Raw Umber", 0x734A12),
    ("Kimberly", 0x736C9F),
    ("Crocodile", 0x736D58),
    ("Crete", 0x737829),
    ("Xanadu", 0x738678),
    ("Spicy Mustard", 0x74640D),
    ("Limed Ash", 0x747D63),
    ("Rolling Stone", 0x747D83),
    ("Blue Smoke", 0x748881),
    ("Laurel", 0x749378),
    ("Mantis", 0x74C365),
    ("Russett", 0x755A57),
    ("Deluge", 0x7563A8),
    ("Cosmic", 0x76395D),
    ("Blue Marguerite", 0x7666C6),
    ("Lima", 0x76BD17),
    ("Sky Blue", 0x76D7EA),
    ("Dark Burgundy", 0x770F05),
    ("Crown of Thorns", 0x771F1F),
    ("Walnut", 0x773F1A),
    ("Pablo", 0x776F61),
    ("Pacifika", 0x778120),
    ("Oxley", 0x779E86),
    ("Pastel Green", 0x77DD77),
    ("Japanese Maple", 0x780109),
    ("Mocha", 0x782D19),
    ("Peanut", 0x782F16),
    ("Camouflage Green", 0x78866B),
    ("Wasabi", 0x788A25),
    ("Ship Cove", 0x788BBA),
    ("Sea Nymph", 0x78A39C),
    ("Roman Coffee", 0x795D4C),
    ("Old Lavender", 0x796878),
    ("Rum", 0x796989),
    ("Fedora", 0x796A78),
    ("Sandstone", 0x796D62),
    ("Spray", 0x79DEEC),
    ("Siren", 0x7A013A),
    ("Fuchsia Blue", 0x7A58C1),
    ("Boulder", 0x7A7A7A),
    ("Wild Blue Yonder", 0x7A89B8),
    ("De York", 0x7AC488),
    ("Red Beech", 0x7B3801),
    ("Cinnamon", 0x7B3F00),
    ("Yukon Gold", 0x7B6608),
    ("Tapa", 0x7B7874),
    ("Waterloo", 0x7B7C94),
    ("Flax Smoke", 0x7B8265),
    ("Amulet", 0x7B9F80),
    ("Asparagus", 0x7BA05B),
    ("Kenyan Copper", 0x7C1C05),
    ("Pesto", 0x7C7631),
    ("Topaz", 0x7C778A),
    ("Concord", 0x7C7B7A),
    ("Jumbo", 0x7C7B82),
    ("Trendy Green", 0x7C881A),
    ("Gumbo", 0x7CA1A6),
    ("Acapulco", 0x7CB0A1),
    ("Neptune", 0x7CB7BB),
    ("Pueblo", 0x7D2C14),
    ("Bay Leaf", 0x7DA98D),
    ("Malibu", 0x7DC8F7),
    ("Bermuda", 0x7DD8C6),
    ("Copper Canyon", 0x7E3A15),
    ("Claret", 0x7F1734),
    ("Peru Tan", 0x7F3A02),
    ("Falcon", 0x7F626D),
    ("Mobster", 0x7F7589),
    ("Moody Blue", 0x7F76D3),
    ("Chartreuse", 0x7FFF00),
    ("Aquamarine", 0x7FFFD4),
    ("Maroon", 0x800000),
    ("Rose Bud Cherry", 0x800B47),
    ("Falu Red", 0x801818),
    ("Red Robin", 0x80341F),
    ("Vivid Violet", 0x803790),
    ("Russet", 0x80461B),
    ("Friar Gray", 0x807E79),
    ("Olive", 0x808000),
    ("Gray", 0x808080),
    ("Gulf Stream", 0x80B3AE),
    ("Glacier", 0x80B3C4),
    ("Seagull", 0x80CCEA),
    ("Nutmeg", 0x81422C),
    ("Spicy Pink", 0x816E71),
    ("Empress", 0x817377),
    ("Spanish Green", 0x819885),
    ("Sand Dune", 0x826F65),
    ("Gunsmoke", 0x828685),
    ("Battleship Gray", 0x828F72),
    ("Merlot", 0x831923),
    ("Shadow", 0x837050),
    ("Chelsea Cucumber", 0x83AA5D),
    ("Monte Carlo", 0x83D0C6),
    ("Plum", 0x843179),
    ("Granny Smith", 0x84A0A0),
    ("Chetwode Blue", 0x8581D9),
    ("Bandicoot", 0x858470),
    ("Bali Hai", 0x859FAF),
    ("Half Baked", 0x85C4CC),
    ("Red Devil", 0x860111),
    ("Lotus", 0x863C3C),
    ("Ironstone", 0x86483C),
    ("Bull Shot", 0x864D1E),
    ("Rusty Nail", 0x86560A),
    ("Bitter", 0x868974),
    ("Regent Gray", 0x86949F),
    ("Disco", 0x871550),
    ("Americano", 0x87756E),
    ("Hurricane", 0x877C7B),
    ("Oslo Gray", 0x878D91),
    ("Sushi", 0x87AB39),
    ("Spicy Mix", 0x885342),
    ("Kumera", 0x886221),
    ("Suva Gray", 0x888387),
    ("Avocado", 0x888D65),
    ("Camelot", 0x893456),
    ("Solid Pink", 0x893843),
    ("Cannon Pink", 0x894367),
    ("Makara", 0x897D6D),
    ("Burnt Umber", 0x8A3324),
    ("True V", 0x8A73D6),
    ("Clay Creek", 0x8A8360),
    ("Monsoon", 0x8A8389),
    ("Stack", 0x8A8F8A),
    ("Jordy Blue", 0x8AB9F1),
    ("Electric Violet", 0x8B00FF),
    ("Monarch", 0x8B0723),
    ("Corn Harvest", 0x8B6B0B),
    ("Olive Haze", 0x8B8470),
    ("Schooner", 0x8B847E),
    ("Natural Gray", 0x8B8680),
    ("Mantle", 0x8B9C90),
    ("Portage", 0x8B9FEE),
    ("Envy", 0x8BA690),
    ("Cascade", 0x8BA9A5),
    ("Riptide", 0x8BE6D8),
    ("Cardinal Pink", 0x8C055E),
    ("Mule Fawn", 0x8C472F),
    ("Potters Clay", 0x8C5738),
    ("Trendy Pink", 0x8C6495),
    ("Paprika", 0x8D0226),
    ("Sanguine Brown", 0x8D3D38),
    ("Tosca", 0x8D3F3F),
    ("Cement", 0x8D7662),
    ("Granite Green", 0x8D8974),
    ("Manatee", 0x8D90A1),
    ("Polo Blue", 0x8DA8CC),
    ("Red Berry", 0x8E0000),
    ("Rope", 0x8E4D1E),
    ("Opium", 0x8E6F70),
    ("Domino", 0x8E775E),
    ("Mamba", 0x8E8190),
    ("Nepal", 0x8EABC1),
    ("Pohutukawa", 0x8F021C),
    ("El Salva", 0x8F3E33),
    ("Korma", 0x8F4B0E),
    ("Squirrel", 0x8F8176),
    ("Vista Blue", 0x8FD6B4),
    ("Burgundy", 0x900020),
    ("Old Brick", 0x901E1E),
    ("Hemp", 0x907874),
    ("Almond Frost", 0x907B71),
    ("Sycamore", 0x908D39),
    ("Sangria", 0x92000A),
    ("Cumin", 0x924321),
    ("Beaver", 0x926F5B),
    ("Stonewall", 0x928573),
    ("Venus", 0x928590),
    ("Medium Purple", 0x9370DB),
    ("Cornflower", 0x93CCEA),
    ("Algae Green", 0x93DFB8),
    ("Copper Rust", 0x944747),
    ("Arrowtown", 0x948771),
    ("Scarlett", 0x950015),
    ("Strikemaster", 0x956387),
    ("Mountain Mist", 0x959396),
    ("Carmine", 0x960018),
    ("Brown", 0x964B00),
    ("Leather", 0x967059),
    ("Purple Mountain's Majesty", 0x9678B6),
    ("Lavender Purple", 0x967BB6),
    ("Pewter", 0x96A8A1),
    ("Summer Green", 0x96BBAB),
    ("Au Chico", 0x97605D),
    ("Wisteria", 0x9771B5),
    ("Atlantis", 0x97CD2D),
    ("Vin Rouge", 0x983D61),
    ("Lilac Bush", 0x9874D3),
    ("Bazaar", 0x98777B),
    ("Hacienda", 0x98811B),
    ("Pale Oyster", 0x988D77),
    ("Mint Green", 0x98FF98),
    ("Fresh Eggplant", 0x990066),
    ("Violet Eggplant", 0x991199),
    ("Tamarillo", 0x991613),
    ("Totem Pole", 0x991B07),
    ("Copper Rose", 0x996666),
    ("Amethyst", 0x9966CC),
    ("Mountbatten Pink", 0x997A8D),
    ("Blue Bell", 0x9999CC),
    ("Prairie Sand", 0x9A3820),
    ("Toast", 0x9A6E61),
    ("Gurkha", 0x9A9577),
    ("Olivine", 0x9AB973),
    ("Shadow Green", 0x9AC2B8),
    ("Oregon", 0x9B4703),
    ("Lemon Grass", 0x9B9E8F),
    ("Stiletto", 0x9C3336),
    ("Hawaiian Tan", 0x9D5616),
    ("Gull Gray", 0x9DACB7),
    ("Pistachio", 0x9DC209),
    ("Granny Smith Apple", 0x9DE093),
    ("Anakiwa", 0x9DE5FF),
    ("Chelsea Gem", 0x9E5302),
    ("Sepia Skin", 0x9E5B40),
    ("Sage", 0x9EA587),
    ("Citron", 0x9EA91F),
    ("Rock Blue", 0x9EB1CD),
    ("Morning Glory", 0x9EDEE0),
    ("Cognac", 0x9F381D),
    ("Reef Gold", 0x9F821C),
    ("Star Dust", 0x9F9F9C),
    ("Santas Gray", 0x9FA0B1),
    ("Sinbad", 0x9FD7D3),
    ("Tabasco", 0xA02712),
    ("Buttered Rum", 0xA1750D),
    ("Hit Gray", 0xA1ADB5),
    ("Citrus", 0xA1C50A),
    ("Aqua Island", 0xA1DAD7),
    ("Rouge", 0xA23B6C),
    ("Cape Palliser", 0xA26645),
    ("Gray Chateau", 0xA2AAB3),
    ("Edward", 0xA2AEAB),
    ("Pharlap", 0xA3807B),
    ("Amethyst Smoke", 0xA397B4),
    ("Blizzard Blue", 0xA3E3ED),
    ("Delta", 0xA4A49D),
    ("Wistful", 0xA4A6D3),
    ("Green Smoke", 0xA4AF6E),
    ("Jazzberry Jam", 0xA50B5E),
    ("Zorba", 0xA59B91),
    ("Bahia", 0xA5CB0C),
    ("Roof Terracotta", 0xA62F20),
    ("Paarl", 0xA65529),
    ("Barley Corn", 0xA68B5B),
    ("Donkey Brown", 0xA69279),
    ("Dawn", 0xA6A29A),
    ("Mexican Red", 0xA72525),
    ("Luxor Gold", 0xA7882C),
    ("Rich Gold", 0xA85307),
    ("Reno Sand", 0xA86515),
    ("Coral Tree", 0xA86B6B),
    ("Dusty Gray", 0xA8989B),
    ("Dull Lavender", 0xA899E6),
    ("Tallow", 0xA8A589),
    ("Bud", 0xA8AE9C),
    ("Locust", 0xA8AF8E),
    ("Norway", 0xA8BD9F),
    ("Chinook", 0xA8E3BD),
    ("Gray Olive", 0xA9A491),
    ("Aluminium", 0xA9ACB6),
    ("Cadet Blue", 0xA9B2C3),
    ("Schist", 0xA9B497),
    ("Tower Gray", 0xA9BDBF),
    ("Perano", 0xA9BEF2),
    ("Opal", 0xA9C6C2),
    ("Night Shadz", 0xAA375A),
    ("Fire", 0xAA4203),
    ("Muesli", 0xAA8B5B),
    ("Sandal", 0xAA8D6F),
    ("Shady Lady", 0xAAA5A9),
    ("Logan", 0xAAA9CD),
    ("Spun Pearl", 0xAAABB7),
    ("Regent St Blue", 0xAAD6E6),
    ("Magic Mint", 0xAAF0D1),
    ("Lipstick", 0xAB0563),
    ("Royal Heath", 0xAB3472),
    ("Sandrift", 0xAB917A),
    ("Cold Purple", 0xABA0D9),
    ("Bronco", 0xABA196),
    ("Limed Oak", 0xAC8A56),
    ("East Side", 0xAC91CE),
    ("Lemon Ginger", 0xAC9E22),
    ("Napa", 0xACA494),
    ("Hillary", 0xACA586),
    ("Cloudy", 0xACA59F),
    ("Silver Chalice", 0xACACAC),
    ("Swamp Green", 0xACB78E),
    ("Spring Rain", 0xACCBB1),
    ("Conifer", 0xACDD4D),
    ("Celadon", 0xACE1AF),
    ("Mandalay", 0xAD781B),
    ("Casper", 0xADBED1),
    ("Moss Green", 0xADDFAD),
    ("Padua", 0xADE6C4),
    ("Green Yellow", 0xADFF2F),
    ("Hippie Pink", 0xAE4560),
    ("Desert", 0xAE6020),
    ("Bouquet", 0xAE809E),
    ("Medium Carmine", 0xAF4035),
    ("Apple Blossom", 0xAF4D43),
    ("Brown Rust", 0xAF593E),
    ("Driftwood", 0xAF8751),
    ("Alpine", 0xAF8F2C),
    ("Lucky", 0xAF9F1C),
    ("Martini", 0xAFA09E),
    ("Bombay", 0xAFB1B8),
    ("Pigeon Post", 0xAFBDD9),
    ("Cadillac", 0xB04C6A),
    ("Matrix", 0xB05D54),
    ("Tapestry", 0xB05E81),
    ("Mai Tai", 0xB06608),
    ("Del Rio", 0xB09A95),
    ("Powder Blue", 0xB0E0E6),
    ("Inch Worm", 0xB0E313),
    ("Bright Red", 0xB10000),
    ("Vesuvius", 0xB14A0B),
    ("Pumpkin Skin", 0xB1610B),
    ("Santa Fe", 0xB16D52),
    ("Teak", 0xB19461),
    ("Fringy Flower", 0xB1E2C1),
    ("Ice Cold", 0xB1F4E7),
    ("Shiraz", 0xB20931),
    ("Biloba Flower", 0xB2A1EA),
    ("Tall Poppy", 0xB32D29),
    ("Fiery Orange", 0xB35213),
    ("Hot Toddy", 0xB38007),
    ("Taupe Gray", 0xB3AF95),
    ("La Rioja", 0xB3C110),
    ("Well Read", 0xB43332),
    ("Blush", 0xB44668),
    ("Jungle Mist", 0xB4CFD3),
    ("Turkish Rose", 0xB57281),
    ("Lavender", 0xB57EDC),
    ("Mongoose", 0xB5A27F),
    ("Olive Green", 0xB5B35C),
    ("Jet Stream", 0xB5D2CE),
    ("Cruise", 0xB5ECDF),
    ("Hibiscus", 0xB6316C),
    ("Thatch", 0xB69D98),
    ("Heathered Gray", 0xB6B095),
    ("Eagle", 0xB6BAA4),
    ("Spindle", 0xB6D1EA),
    ("Gum Leaf", 0xB6D3BF),
    ("Rust", 0xB7410E),
    ("Muddy Waters", 0xB78E5C),
    ("Sahara", 0xB7A214),
    ("Husk", 0xB7A458),
    ("Nobel", 0xB7B1B1),
    ("Heather", 0xB7C3D0),
    ("Madang", 0xB7F0BE),
    ("Milano Red", 0xB81104),
    ("Copper", 0xB87333),
    ("Gimblet", 0xB8B56A),
    ("Green Spring", 0xB8C1B1),
    ("Celery", 0xB8C25D),
    ("Sail", 0xB8E0F9),
    ("Chestnut", 0xB94E48),
    ("Crail", 0xB95140),
    ("Marigold", 0xB98D28),
    ("Wild Willow", 0xB9C46A),
    ("Rainee", 0xB9C8AC),
    ("Guardsman Red", 0xBA0101),
    ("Rock Spray", 0xBA450C),
    ("Bourbon", 0xBA6F1E),
    ("Pirate Gold", 0xBA7F03),
    ("Nomad", 0xBAB1A2),
    ("Submarine", 0xBAC7C9),
    ("Charlotte", 0xBAEEF9),
    ("Medium Red Violet", 0xBB3385),
    ("Brandy Rose", 0xBB8983),
    ("Rio Grande", 0xBBD009),
    ("Surf", 0xBBD7C1),
    ("Powder Ash", 0xBCC9C2),
    ("Tuscany", 0xBD5E2E),
    ("Quicksand", 0xBD978E),
    ("Silk", 0xBDB1A8),
    ("Malta", 0xBDB2A1),
    ("Chatelle", 0xBDB3C7),
    ("Lavender Gray", 0xBDBBD7),
    ("French Gray", 0xBDBDC6),
    ("Clay Ash", 0xBDC8B3),
    ("Loblolly", 0xBDC9CE),
    ("French Pass", 0xBDEDFD),
    ("London Hue", 0xBEA6C3),
    ("Pink Swan", 0xBEB5B7),
    ("Fuego", 0xBEDE0D),
    ("Rose of Sharon", 0xBF5500),
    ("Tide", 0xBFB8B0),
    ("Blue Haze", 0xBFBED8),
    ("Silver Sand", 0xBFC1C2),
    ("Key Lime Pie", 0xBFC921),
    ("Ziggurat", 0xBFDBE2),
    ("Lime", 0xBFFF00),
    ("Thunderbird", 0xC02B18),
    ("Mojo", 0xC04737),
    ("Old Rose", 0xC08081),
    ("Silver", 0xC0C0C0),
    ("Pale Leaf", 0xC0D3B9),
    ("Pixie Green", 0xC0D8B6),
    ("Tia Maria", 0xC1440E),
    ("Fuchsia Pink", 0xC154C1),
    ("Buddha Gold", 0xC1A004),
    ("Bison Hide", 0xC1B7A4),
    ("Tea", 0xC1BAB0),
    ("Gray Suit", 0xC1BECD),
    ("Sprout", 0xC1D7B0),
    ("Sulu", 0xC1F07C),
    ("Indochine", 0xC26B03),
    ("Twine", 0xC2955D),
    ("Cotton Seed", 0xC2BDB6),
    ("Pumice", 0xC2CAC4),
    ("Jagged Ice", 0xC2E8E5),
    ("Maroon Flush", 0xC32148),
    ("Indian Khaki", 0xC3B091),
    ("Pale Slate", 0xC3BFC1),
    ("Gray Nickel", 0xC3C3BD),
    ("Periwinkle Gray", 0xC3CDE6),
    ("Tiara", 0xC3D1D1),
    ("Tropical Blue", 0xC3DDF9),
    ("Cardinal", 0xC41E3A),
    ("Fuzzy Wuzzy Brown", 0xC45655),
    ("Orange Roughy", 0xC45719),
    ("Mist Gray", 0xC4C4BC),
    ("Coriander", 0xC4D0B0),
    ("Mint Tulip", 0xC4F4EB),
    ("Mulberry", 0xC54B8C),
    ("Nugget", 0xC59922),
    ("Tussock", 0xC5994B),
    ("Sea Mist", 0xC5DBCA),
    ("Yellow Green", 0xC5E17A),
    ("Brick Red", 0xC62D42),
    ("Contessa", 0xC6726B),
    ("Oriental Pink", 0xC69191),
    ("Roti", 0xC6A84B),
    ("Ash", 0xC6C3B5),
    ("Kangaroo", 0xC6C8BD),
    ("Las Palmas", 0xC6E610),
    ("Monza", 0xC7031E),
    ("Red Violet", 0xC71585),
    ("Coral Reef", 0xC7BCA2),
    ("Melrose", 0xC7C1FF),
    ("Cloud", 0xC7C4BF),
    ("Ghost", 0xC7C9D5),
    ("Pine Glade", 0xC7CD90),
    ("Botticelli", 0xC7DDE5),
    ("Antique Brass", 0xC88A65),
    ("Lilac", 0xC8A2C8),
    ("Hokey Pokey", 0xC8A528),
    ("Lily", 0xC8AABF),
    ("Laser", 0xC8B568),
    ("Edgewater", 0xC8E3D7),
    ("Piper", 0xC96323),
    ("Pizza", 0xC99415),
    ("Light Wisteria", 0xC9A0DC),
    ("Rodeo Dust", 0xC9B29B),
    ("Sundance", 0xC9B35B),
    ("Earls Green", 0xC9B93B),
    ("Silver Rust", 0xC9C0BB),
    ("Conch", 0xC9D9D2),
    ("Reef", 0xC9FFA2),
    ("Aero Blue", 0xC9FFE5),
    ("Flush Mahogany", 0xCA3435),
    ("Turmeric", 0xCABB48),
    ("Paris White", 0xCADCD4),
    ("Bitter Lemon", 0xCAE00D),
    ("Skeptic", 0xCAE6DA),
    ("Viola", 0xCB8FA9),
    ("Foggy Gray", 0xCBCAB6),
    ("Green Mist", 0xCBD3B0),
    ("Nebula", 0xCBDBD6),
    ("Persian Red", 0xCC3333),
    ("Burnt Orange", 0xCC5500),
    ("Ochre", 0xCC7722),
    ("Puce", 0xCC8899),
    ("Thistle Green", 0xCCCAA8),
    ("Periwinkle", 0xCCCCFF),
    ("Electric Lime", 0xCCFF00),
    ("Tenn", 0xCD5700),
    ("Chestnut Rose", 0xCD5C5C),
    ("Brandy Punch", 0xCD8429),
    ("Onahau", 0xCDF4FF),
    ("Sorrell Brown", 0xCEB98F),
    ("Cold Turkey", 0xCEBABA),
    ("Yuma", 0xCEC291),
    ("Chino", 0xCEC7A7),
    ("Eunry", 0xCFA39D),
    ("Old Gold", 0xCFB53B),
    ("Tasman", 0xCFDCCF),
    ("Surf Crest", 0xCFE5D2),
    ("Humming Bird", 0xCFF9F3),
    ("Scandal", 0xCFFAF4),
    ("Red Stage", 0xD05F04),
    ("Hopbush", 0xD06DA1),
    ("Meteor", 0xD07D12),
    ("Perfume", 0xD0BEF8),
    ("Prelude", 0xD0C0E5),
    ("Tea Green", 0xD0F0C0),
    ("Geebung", 0xD18F1B),
    ("Vanilla", 0xD1BEA8),
    ("Soft Amber", 0xD1C6B4),
    ("Celeste", 0xD1D2CA),
    ("Mischka", 0xD1D2DD),
    ("Pear", 0xD1E231),
    ("Hot Cinnamon", 0xD2691E),
    ("Raw Sienna", 0xD27D46),
    ("Careys Pink", 0xD29EAA),
    ("Tan", 0xD2B48C),
    ("Deco", 0xD2DA97),
    ("Blue Romance", 0xD2F6DE),
    ("Gossip", 0xD2F8B0),
    ("Sisal", 0xD3CBBA),
    ("Swirl", 0xD3CDC5),
    ("Charm", 0xD47494),
    ("Clam Shell", 0xD4B6AF),
    ("Straw", 0xD4BF8D),
    ("Akaroa", 0xD4C4A8),
    ("Bird Flower", 0xD4CD16),
    ("Iron", 0xD4D7D9),
    ("Geyser", 0xD4DFE2),
    ("Hawkes Blue", 0xD4E2FC),
    ("Grenadier", 0xD54600),
    ("Can Can", 0xD591A4),
    ("Whiskey", 0xD59A6F),
    ("Winter Hazel", 0xD5D195),
    ("Granny Apple", 0xD5F6E3),
    ("My Pink", 0xD69188),
    ("Tacha", 0xD6C562),
    ("Moon Raker", 0xD6CEF6),
    ("Quill Gray", 0xD6D6D1),
    ("Snowy Mint", 0xD6FFDB),
    ("New York Pink", 0xD7837F),
    ("Pavlova", 0xD7C498),
    ("Fog", 0xD7D0FF),
    ("Valencia", 0xD84437),
    ("Japonica", 0xD87C63),
    ("Thistle", 0xD8BFD8),
    ("Maverick", 0xD8C2D5),
    ("Foam", 0xD8FCFA),
    ("Cabaret", 0xD94972),
    ("Burning Sand", 0xD99376),
    ("Cameo", 0xD9B99B),
    ("Timberwolf", 0xD9D6CF),
    ("Tana", 0xD9DCC1),
    ("Link Water", 0xD9E4F5),
    ("Mabel", 0xD9F7FF),
    ("Cerise", 0xDA3287),
    ("Flame Pea", 0xDA5B38),
    ("Bamboo", 0xDA6304),
    ("Red Damask", 0xDA6A41),
    ("Orchid", 0xDA70D6),
    ("Copperfield", 0xDA8A67),
    ("Golden Grass", 0xDAA520),
    ("Zanah", 0xDAECD6),
    ("Iceberg", 0xDAF4F0),
    ("Oyster Bay", 0xDAFAFF),
    ("Cranberry", 0xDB5079),
    ("Petite Orchid", 0xDB9690),
    ("Di Serria", 0xDB995E),
    ("Alto", 0xDBDBDB),
    ("Frosted Mint", 0xDBFFF8),
    ("Crimson", 0xDC143C),
    ("Punch", 0xDC4333),
    ("Galliano", 0xDCB20C),
    ("Blossom", 0xDCB4BC),
    ("Wattle", 0xDCD747),
    ("Westar", 0xDCD9D2),
    ("Moon Mist", 0xDCDDCC),
    ("Caper", 0xDCEDB4),
    ("Swans Down", 0xDCF0EA),
    ("Swiss Coffee", 0xDDD6D5),
    ("White Ice", 0xDDF9F1),
    ("Cerise Red", 0xDE3163),
    ("Roman", 0xDE6360),
    ("Tumbleweed", 0xDEA681),
    ("Gold Tips", 0xDEBA13),
    ("Brandy", 0xDEC196),
    ("Wafer", 0xDECBC6),
    ("Sapling", 0xDED4A4),
    ("Barberry", 0xDED717),
    ("Beryl Green", 0xDEE5C0),
    ("Pattens Blue", 0xDEF5FF),
    ("Heliotrope", 0xDF73FF),
    ("Apache", 0xDFBE6F),
    ("Chenin", 0xDFCD6F),
    ("Lola", 0xDFCFDB),
    ("Willow Brook", 0xDFECDA),
    ("Chartreuse Yellow", 0xDFFF00),
    ("Mauve", 0xE0B0FF),
    ("Anzac", 0xE0B646),
    ("Harvest Gold", 0xE0B974),
    ("Calico", 0xE0C095),
    ("Baby Blue", 0xE0FFFF),
    ("Sunglo", 0xE16865),
    ("Equator", 0xE1BC64),
    ("Pink Flare", 0xE1C0C8),
    ("Periglacial Blue", 0xE1E6D6),
    ("Kidnapper", 0xE1EAD4),
    ("Tara", 0xE1F6E8),
    ("Mandy", 0xE25465),
    ("Terracotta", 0xE2725B),
    ("Golden Bell", 0xE28913),
    ("Shocking", 0xE292C0),
    ("Dixie", 0xE29418),
    ("Light Orchid", 0xE29CD2),
    ("Snuff", 0xE2D8ED),
    ("Mystic", 0xE2EBED),
    ("Apple Green", 0xE2F3EC),
    ("Razzmatazz", 0xE30B5C),
    ("Alizarin Crimson", 0xE32636),
    ("Cinnabar", 0xE34234),
    ("Cavern Pink", 0xE3BEBE),
    ("Peppermint", 0xE3F5E1),
    ("Mindaro", 0xE3F988),
    ("Deep Blush", 0xE47698),
    ("Gamboge", 0xE49B0F),
    ("Melanie", 0xE4C2D5),
    ("Twilight", 0xE4CFDE),
    ("Bone", 0xE4D1C0),
    ("Sunflower", 0xE4D422),
    ("Grain Brown", 0xE4D5B7),
    ("Zombie", 0xE4D69B),
    ("Frostee", 0xE4F6E7),
    ("Snow Flurry", 0xE4FFD1),
    ("Amaranth", 0xE52B50),
    ("Zest", 0xE5841B),
    ("Dust Storm", 0xE5CCC9),
    ("Stark White", 0xE5D7BD),
    ("Hampton", 0xE5D8AF),
    ("Bon Jour", 0xE5E0E1),
    ("Mercury", 0xE5E5E5),
    ("Polar", 0xE5F9F6),
    ("Trinidad", 0xE64E03),
    ("Gold Sand", 0xE6BE8A),
    ("Cashmere", 0xE6BEA5),
    ("Double Spanish White", 0xE6D7B9),
    ("Satin Linen", 0xE6E4D4),
    ("Harp", 0xE6F2EA),
    ("Off Green", 0xE6F8F3),
    ("Hint of Green", 0xE6FFE9),
    ("Tranquil", 0xE6FFFF),
    ("Mango Tango", 0xE77200),
    ("Christine", 0xE7730A),
    ("Tonys Pink", 0xE79F8C),
    ("Kobi", 0xE79FC4),
    ("Rose Fog", 0xE7BCB4),
    ("Corn", 0xE7BF05),
    ("Putty", 0xE7CD8C),
    ("Gray Nurse", 0xE7ECE6),
    ("Lily White", 0xE7F8FF),
    ("Bubbles", 0xE7FEFF),
    ("Fire Bush", 0xE89928),
    ("Shilo", 0xE8B9B3),
    ("Pearl Bush", 0xE8E0D5),
    ("Green White", 0xE8EBE0),
    ("Chrome White", 0xE8F1D4),
    ("Gin", 0xE8F2EB),
    ("Aqua Squeeze", 0xE8F5F2),
    ("Clementine", 0xE96E00),
    ("Burnt Sienna", 0xE97451),
    ("Tahiti Gold", 0xE97C07),
    ("Oyster Pink", 0xE9CECD),
    ("Confetti", 0xE9D75A),
    ("Ebb", 0xE9E3E3),
    ("Ottoman", 0xE9F8ED),
    ("Clear Day", 0xE9FFFD),
    ("Carissma", 0xEA88A8),
    ("Porsche", 0xEAAE69),
    ("Tulip Tree", 0xEAB33B),
    ("Rob Roy", 0xEAC674),
    ("Raffia", 0xEADAB8),
    ("White Rock", 0xEAE8D4),
    ("Panache", 0xEAF6EE),
    ("Solitude", 0xEAF6FF),
    ("Aqua Spring", 0xEAF9F5),
    ("Dew", 0xEAFFFE),
    ("Apricot", 0xEB9373),
    ("Zinnwaldite", 0xEBC2AF),
    ("Fuel Yellow", 0xECA927),
    ("Ronchi", 0xECC54E),
    ("French Lilac", 0xECC7EE),
    ("Just Right", 0xECCDB9),
    ("Wild Rice", 0xECE090),
    ("Fall Green", 0xECEBBD),
    ("Aths Special", 0xECEBCE),
    ("Starship", 0xECF245),
    ("Red Ribbon", 0xED0A3F),
    ("Tango", 0xED7A1C),
    ("Carrot Orange", 0xED9121),
    ("Sea Pink", 0xED989E),
    ("Tacao", 0xEDB381),
    ("Desert Sand", 0xEDC9AF),
    ("Pancho", 0xEDCDAB),
    ("Chamois", 0xEDDCB1),
    ("Primrose", 0xEDEA99),
    ("Frost", 0xEDF5DD),
    ("Aqua Haze", 0xEDF5F5),
    ("Zumthor", 0xEDF6FF),
    ("Narvik", 0xEDF9F1),
    ("Honeysuckle", 0xEDFC84),
    ("Lavender Magenta", 0xEE82EE),
    ("Beauty Bush", 0xEEC1BE),
    ("Chalky", 0xEED794),
    ("Almond", 0xEED9C4),
    ("Flax", 0xEEDC82),
    ("Bizarre", 0xEEDEDA),
    ("Double Colonial White", 0xEEE3AD),
    ("Cararra", 0xEEEEE8),
    ("Manz", 0xEEEF78),
    ("Tahuna Sands", 0xEEF0C8),
    ("Athens Gray", 0xEEF0F3),
    ("Tusk", 0xEEF3C3),
    ("Loafer", 0xEEF4DE),
    ("Catskill White", 0xEEF6F7),
    ("Twilight Blue", 0xEEFDFF),
    ("Jonquil", 0xEEFF9A),
    ("Rice Flower", 0xEEFFE2),
    ("Jaffa", 0xEF863F),
    ("Gallery", 0xEFEFEF),
    ("Porcelain", 0xEFF2F3),
    ("Mauvelous", 0xF091A9),
    ("Golden Dream", 0xF0D52D),
    ("Golden Sand", 0xF0DB7D),
    ("Buff", 0xF0DC82),
    ("Prim", 0xF0E2EC),
    ("Khaki", 0xF0E68C),
    ("Selago", 0xF0EEFD),
    ("Titan White", 0xF0EEFF),
    ("Alice Blue", 0xF0F8FF),
    ("Feta", 0xF0FCEA),
    ("Gold Drop", 0xF18200),
    ("Wewak", 0xF19BAB),
    ("Sahara Sand", 0xF1E788),
    ("Parchment", 0xF1E9D2),
    ("Blue Chalk", 0xF1E9FF),
    ("Mint Julep", 0xF1EEC1),
    ("Seashell", 0xF1F1F1),
    ("Saltpan", 0xF1F7F2),
    ("Tidal", 0xF1FFAD),
    ("Chiffon", 0xF1FFC8),
    ("Flamingo", 0xF2552A),
    ("Tangerine", 0xF28500),
    ("Mandys Pink", 0xF2C3B2),
    ("Concrete", 0xF2F2F2),
    ("Black Squeeze", 0xF2FAFA),
    ("Pomegranate", 0xF34723),
    ("Buttercup", 0xF3AD16),
    ("New Orleans", 0xF3D69D),
    ("Vanilla Ice", 0xF3D9DF),
    ("Sidecar", 0xF3E7BB),
    ("Dawn Pink", 0xF3E9E5),
    ("Wheatfield", 0xF3EDCF),
    ("Canary", 0xF3FB62),
    ("Orinoco", 0xF3FBD4),
    ("Carla", 0xF3FFD8),
    ("Hollywood Cerise", 0xF400A1),
    ("Sandy brown", 0xF4A460),
    ("Saffron", 0xF4C430),
    ("Ripe Lemon", 0xF4D81C),
    ("Janna", 0xF4EBD3),
    ("Pampas", 0xF4F2EE),
    ("Wild Sand", 0xF4F4F4),
    ("Zircon", 0xF4F8FF),
    ("Froly", 0xF57584),
    ("Cream Can", 0xF5C85C),
    ("Manhattan", 0xF5C999),
    ("Maize", 0xF5D5A0),
    ("Wheat", 0xF5DEB3),
    ("Sandwisp", 0xF5E7A2),
    ("Pot Pourri", 0xF5E7E2),
    ("Albescent White", 0xF5E9D3),
    ("Soft Peach", 0xF5EDEF),
    ("Ecru White", 0xF5F3E5),
    ("Beige", 0xF5F5DC),
    ("Golden Fizz", 0xF5FB3D),
    ("Australian Mint", 0xF5FFBE),
    ("French Rose", 0xF64A8A),
    ("Brilliant Rose", 0xF653A6),
    ("Illusion", 0xF6A4C9),
    ("Merino", 0xF6F0E6),
    ("Black Haze", 0xF6F7F7),
    ("Spring Sun", 0xF6FFDC),
    ("Violet Red", 0xF7468A),
    ("Chilean Fire", 0xF77703),
    ("Persian Pink", 0xF77FBE),
    ("Rajah", 0xF7B668),
    ("Azalea", 0xF7C8DA),
    ("We Peep", 0xF7DBE6),
    ("Quarter Spanish White", 0xF7F2E1),
    ("Whisper", 0xF7F5FA),
    ("Snow Drift", 0xF7FAF7),
    ("Casablanca", 0xF8B853),
    ("Chantilly", 0xF8C3DF),
    ("Cherub", 0xF8D9E9),
    ("Marzipan", 0xF8DB9D),
    ("Energy Yellow", 0xF8DD5C),
    ("Givry", 0xF8E4BF),
    ("White Linen", 0xF8F0E8),
    ("Magnolia", 0xF8F4FF),
    ("Spring Wood", 0xF8F6F1),
    ("Coconut Cream", 0xF8F7DC),
    ("White Lilac", 0xF8F7FC),
    ("Desert Storm", 0xF8F8F7),
    ("Texas", 0xF8F99C),
    ("Corn Field", 0xF8FACD),
    ("Mimosa", 0xF8FDD3),
    ("Carnation", 0xF95A61),
    ("Saffron Mango", 0xF9BF58),
    ("Carousel Pink", 0xF9E0ED),
    ("Dairy Cream", 0xF9E4BC),
    ("Portica", 0xF9E663),
    ("Amour", 0xF9EAF3),
    ("Rum Swizzle", 0xF9F8E4),
    ("Dolly", 0xF9FF8B),
    ("Sugar Cane", 0xF9FFF6),
    ("Ecstasy", 0xFA7814),
    ("Tan Hide", 0xFA9D5A),
    ("Corvette", 0xFAD3A2),
    ("Peach Yellow", 0xFADFAD),
    ("Turbo", 0xFAE600),
    ("Astra", 0xFAEAB9),
    ("Champagne", 0xFAECCC),
    ("Linen", 0xFAF0E6),
    ("Fantasy", 0xFAF3F0),
    ("Citrine White", 0xFAF7D6),
    ("Alabaster", 0xFAFAFA),
    ("Hint of Yellow", 0xFAFDE4),
    ("Milan", 0xFAFFA4),
    ("Brink Pink", 0xFB607F),
    ("Geraldine", 0xFB8989),
    ("Lavender Rose", 0xFBA0E3),
    ("Sea Buckthorn", 0xFBA129),
    ("Sun", 0xFBAC13),
    ("Lavender Pink", 0xFBAED2),
    ("Rose Bud", 0xFBB2A3),
    ("Cupid", 0xFBBEDA),
    ("Classic Rose", 0xFBCCE7),
    ("Apricot Peach", 0xFBCEB1),
    ("Banana Mania", 0xFBE7B2),
    ("Marigold Yellow", 0xFBE870),
    ("Festival", 0xFBE96C),
    ("Sweet Corn", 0xFBEA8C),
    ("Candy Corn", 0xFBEC5D),
    ("Hint of Red", 0xFBF9F9),
    ("Shalimar", 0xFBFFBA),
    ("Shocking Pink", 0xFC0FC0),
    ("Tickle Me Pink", 0xFC80A5),
    ("Tree Poppy", 0xFC9C1D),
    ("Lightning Yellow", 0xFCC01E),
    ("Goldenrod", 0xFCD667),
    ("Candlelight", 0xFCD917),
    ("Cherokee", 0xFCDA98),
    ("Double Pearl Lusta", 0xFCF4D0),
    ("Pearl Lusta", 0xFCF4DC),
    ("Vista White", 0xFCF8F7),
    ("Bianca", 0xFCFBF3),
    ("Moon Glow", 0xFCFEDA),
    ("China Ivory", 0xFCFFE7),
    ("Ceramic", 0xFCFFF9),
    ("Torch Red", 0xFD0E35),
    ("Wild Watermelon", 0xFD5B78),
    ("Crusta", 0xFD7B33),
    ("Sorbus", 0xFD7C07),
    ("Sweet Pink", 0xFD9FA2),
    ("Light Apricot", 0xFDD5B1),
    ("Pig Pink", 0xFDD7E4),
    ("Cinderella", 0xFDE1DC),
    ("Golden Glow", 0xFDE295),
    ("Lemon", 0xFDE910),
    ("Old Lace", 0xFDF5E6),
    ("Half Colonial White", 0xFDF6D3),
    ("Drover", 0xFDF7AD),
    ("Pale Prim", 0xFDFEB8),
    ("Cumulus", 0xFDFFD5),
    ("Persian Rose", 0xFE28A2),
    ("Sunset Orange", 0xFE4C40),
    ("Bittersweet", 0xFE6F5E),
    ("California", 0xFE9D04),
    ("Yellow Sea", 0xFEA904),
    ("Melon", 0xFEBAAD),
    ("Bright Sun", 0xFED33C),
    ("Dandelion", 0xFED85D),
    ("Salomie", 0xFEDB8D),
    ("Cape Honey", 0xFEE5AC),
    ("Remy", 0xFEEBF3),
    ("Oasis", 0xFEEFCE),
    ("Bridesmaid", 0xFEF0EC),
    ("Beeswax", 0xFEF2C7),
    ("Bleach White", 0xFEF3D8),
    ("Pipi", 0xFEF4CC),
    ("Half Spanish White", 0xFEF4DB),
    ("Wisp Pink", 0xFEF4F8),
    ("Provincial Pink", 0xFEF5F1),
    ("Half Dutch White", 0xFEF7DE),
    ("Solitaire", 0xFEF8E2),
    ("White Pointer", 0xFEF8FF),
    ("Off Yellow", 0xFEF9E3),
    ("Orange White", 0xFEFCED),
    ("Red", 0xFF0000),
    ("Rose", 0xFF007F),
    ("Purple Pizzazz", 0xFF00CC),
    ("Magenta / Fuchsia", 0xFF00FF),
    ("Scarlet", 0xFF2400),
    ("Wild Strawberry", 0xFF3399),
    ("Razzle Dazzle Rose", 0xFF33CC),
    ("Radical Red", 0xFF355E),
    ("Red Orange", 0xFF3F34),
    ("Coral Red", 0xFF4040),
    ("Vermilion", 0xFF4D00),
    ("International Orange", 0xFF4F00),
    ("Outrageous Orange", 0xFF6037),
    ("Blaze Orange", 0xFF6600),
    ("Pink Flamingo", 0xFF66FF),
    ("Orange", 0xFF681F),
    ("Hot Pink", 0xFF69B4),
    ("Persimmon", 0xFF6B53),
    ("Blush Pink", 0xFF6FFF),
    ("Burning Orange", 0xFF7034),
    ("Pumpkin", 0xFF7518),
    ("Flamenco", 0xFF7D07),
    ("Flush Orange", 0xFF7F00),
    ("Coral", 0xFF7F50),
    ("Salmon", 0xFF8C69),
    ("Pizazz", 0xFF9000),
    ("West Side", 0xFF910F),
    ("Pink Salmon", 0xFF91A4),
    ("Neon Carrot", 0xFF9933),
    ("Atomic Tangerine", 0xFF9966),
    ("Vivid Tangerine", 0xFF9980),
    ("Sunshade", 0xFF9E2C),
    ("Orange Peel", 0xFFA000),
    ("Mona Lisa", 0xFFA194),
    ("Web Orange", 0xFFA500),
    ("Carnation Pink", 0xFFA6C9),
    ("Hit Pink", 0xFFAB81),
    ("Yellow Orange", 0xFFAE42),
    ("Cornflower Lilac", 0xFFB0AC),
    ("Sundown", 0xFFB1B3),
    ("My Sin", 0xFFB31F),
    ("Texas Rose", 0xFFB555),
    ("Cotton Candy", 0xFFB7D5),
    ("Macaroni and Cheese", 0xFFB97B),
    ("Selective Yellow", 0xFFBA00),
    ("Koromiko", 0xFFBD5F),
    ("Amber", 0xFFBF00),
    ("Wax Flower", 0xFFC0A8),
    ("Pink", 0xFFC0CB),
    ("Your Pink", 0xFFC3C0),
    ("Supernova", 0xFFC901),
    ("Flesh", 0xFFCBA4),
    ("Sunglow", 0xFFCC33),
    ("Golden Tainoi", 0xFFCC5C),
    ("Peach Orange", 0xFFCC99),
    ("Chardonnay", 0xFFCD8C),
    ("Pastel Pink", 0xFFD1DC),
    ("Romantic", 0xFFD2B7),
    ("Grandis", 0xFFD38C),
    ("Gold", 0xFFD700),
    ("School bus Yellow", 0xFFD800),
    ("Cosmos", 0xFFD8D9),
    ("Mustard", 0xFFDB58),
    ("Peach Schnapps", 0xFFDCD6),
    ("Caramel", 0xFFDDAF),
    ("Tuft Bush", 0xFFDDCD),
    ("Watusi", 0xFFDDCF),
    ("Pink Lace", 0xFFDDF4),
    ("Navajo White", 0xFFDEAD),
    ("Frangipani", 0xFFDEB3),
    ("Pippin", 0xFFE1DF),
    ("Pale Rose", 0xFFE1F2),
    ("Negroni", 0xFFE2C5),
    ("Cream Brulee", 0xFFE5A0),
    ("Peach", 0xFFE5B4),
    ("Tequila", 0xFFE6C7),
    ("Kournikova", 0xFFE772),
    ("Sandy Beach", 0xFFEAC8),
    ("Karry", 0xFFEAD4),
    ("Broom", 0xFFEC13),
    ("Colonial White", 0xFFEDBC),
    ("Derby", 0xFFEED8),
    ("Vis Vis", 0xFFEFA1),
    ("Egg White", 0xFFEFC1),
    ("Papaya Whip", 0xFFEFD5),
    ("Fair Pink", 0xFFEFEC),
    ("Peach Cream", 0xFFF0DB),
    ("Lavender blush", 0xFFF0F5),
    ("Gorse", 0xFFF14F),
    ("Buttermilk", 0xFFF1B5),
    ("Pink Lady", 0xFFF1D8),
    ("Forget Me Not", 0xFFF1EE),
    ("Tutu", 0xFFF1F9),
    ("Picasso", 0xFFF39D),
    ("Chardon", 0xFFF3F1),
    ("Paris Daisy", 0xFFF46E),
    ("Barley White", 0xFFF4CE),
    ("Egg Sour", 0xFFF4DD),
    ("Sazerac", 0xFFF4E0),
    ("Serenade", 0xFFF4E8),
    ("Chablis", 0xFFF4F3),
    ("Seashell Peach", 0xFFF5EE),
    ("Sauvignon", 0xFFF5F3),
    ("Milk Punch", 0xFFF6D4),
    ("Varden", 0xFFF6DF),
    ("Rose White", 0xFFF6F5),
    ("Baja White", 0xFFF8D1),
    ("Gin Fizz", 0xFFF9E2),
    ("Early Dawn", 0xFFF9E6),
    ("Lemon Chiffon", 0xFFFACD),
    ("Bridal Heath", 0xFFFAF4),
    ("Scotch Mist", 0xFFFBDC),
    ("Soapstone", 0xFFFBF9),
    ("Witch Haze", 0xFFFC99),
    ("Buttery White", 0xFFFCEA),
    ("Island Spice", 0xFFFCEE),
    ("Cream", 0xFFFDD0),
    ("Chilean Heath", 0xFFFDE6),
    ("Travertine", 0xFFFDE8),
    ("Orchid White", 0xFFFDF3),
    ("Quarter Pearl Lusta", 0xFFFDF4),
    ("Half and Half", 0xFFFEE1),
    ("Apricot White", 0xFFFEEC),
    ("Rice Cake", 0xFFFEF0),
    ("Black White", 0xFFFEF6),
    ("Romance", 0xFFFEFD),
    ("Yellow", 0xFFFF00),
    ("Laser Lemon", 0xFFFF66),
    ("Pale Canary", 0xFFFF99),
    ("Portafino", 0xFFFFB4),
    ("Ivory", 0xFFFFF0),
    ("White", 0xFFFFFF),
];
