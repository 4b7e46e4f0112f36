//! Country codes used as feature ids in the bundled world dataset.
//!
//! Codes are ISO 3166-1 alpha-3 where one exists. Territories without one
//! carry a placeholder: Northern Cyprus and Somaliland both use `"-99"`, so a
//! selection containing either highlights both.

pub const AFGHANISTAN: &str = "AFG";
pub const ANGOLA: &str = "AGO";
pub const ALBANIA: &str = "ALB";
pub const UNITED_ARAB_EMIRATES: &str = "ARE";
pub const ARGENTINA: &str = "ARG";
pub const ARMENIA: &str = "ARM";
pub const ANTARCTICA: &str = "ATA";
pub const FRENCH_SOUTHERN_AND_ANTARCTIC_LANDS: &str = "ATF";
pub const AUSTRALIA: &str = "AUS";
pub const AUSTRIA: &str = "AUT";
pub const AZERBAIJAN: &str = "AZE";
pub const BURUNDI: &str = "BDI";
pub const BELGIUM: &str = "BEL";
pub const BENIN: &str = "BEN";
pub const BURKINA_FASO: &str = "BFA";
pub const BANGLADESH: &str = "BGD";
pub const BULGARIA: &str = "BGR";
pub const THE_BAHAMAS: &str = "BHS";
pub const BOSNIA_AND_HERZEGOVINA: &str = "BIH";
pub const BELARUS: &str = "BLR";
pub const BELIZE: &str = "BLZ";
pub const BERMUDA: &str = "BMU";
pub const BOLIVIA: &str = "BOL";
pub const BRAZIL: &str = "BRA";
pub const BRUNEI: &str = "BRN";
pub const BHUTAN: &str = "BTN";
pub const BOTSWANA: &str = "BWA";
pub const CENTRAL_AFRICAN_REPUBLIC: &str = "CAF";
pub const CANADA: &str = "CAN";
pub const SWITZERLAND: &str = "CHE";
pub const CHILE: &str = "CHL";
pub const CHINA: &str = "CHN";
pub const IVORY_COAST: &str = "CIV";
pub const CAMEROON: &str = "CMR";
pub const DEMOCRATIC_REPUBLIC_OF_THE_CONGO: &str = "COD";
pub const REPUBLIC_OF_THE_CONGO: &str = "COG";
pub const COLOMBIA: &str = "COL";
pub const COSTA_RICA: &str = "CRI";
pub const CUBA: &str = "CUB";
pub const NORTHERN_CYPRUS: &str = "-99";
pub const CYPRUS: &str = "CYP";
pub const CZECH_REPUBLIC: &str = "CZE";
pub const GERMANY: &str = "DEU";
pub const DJIBOUTI: &str = "DJI";
pub const DENMARK: &str = "DNK";
pub const DOMINICAN_REPUBLIC: &str = "DOM";
pub const ALGERIA: &str = "DZA";
pub const ECUADOR: &str = "ECU";
pub const EGYPT: &str = "EGY";
pub const ERITREA: &str = "ERI";
pub const SPAIN: &str = "ESP";
pub const ESTONIA: &str = "EST";
pub const ETHIOPIA: &str = "ETH";
pub const FINLAND: &str = "FIN";
pub const FIJI: &str = "FJI";
pub const FALKLAND_ISLANDS: &str = "FLK";
pub const FRANCE: &str = "FRA";
pub const GABON: &str = "GAB";
pub const UNITED_KINGDOM: &str = "GBR";
pub const GEORGIA: &str = "GEO";
pub const GHANA: &str = "GHA";
pub const GUINEA: &str = "GIN";
pub const GAMBIA: &str = "GMB";
pub const GUINEA_BISSAU: &str = "GNB";
pub const EQUATORIAL_GUINEA: &str = "GNQ";
pub const GREECE: &str = "GRC";
pub const GREENLAND: &str = "GRL";
pub const GUATEMALA: &str = "GTM";
pub const FRENCH_GUIANA: &str = "GUF";
pub const GUYANA: &str = "GUY";
pub const HONDURAS: &str = "HND";
pub const CROATIA: &str = "HRV";
pub const HAITI: &str = "HTI";
pub const HUNGARY: &str = "HUN";
pub const INDONESIA: &str = "IDN";
pub const INDIA: &str = "IND";
pub const IRELAND: &str = "IRL";
pub const IRAN: &str = "IRN";
pub const IRAQ: &str = "IRQ";
pub const ICELAND: &str = "ISL";
pub const ISRAEL: &str = "ISR";
pub const ITALY: &str = "ITA";
pub const JAMAICA: &str = "JAM";
pub const JORDAN: &str = "JOR";
pub const JAPAN: &str = "JPN";
pub const KAZAKHSTAN: &str = "KAZ";
pub const KENYA: &str = "KEN";
pub const KYRGYZSTAN: &str = "KGZ";
pub const CAMBODIA: &str = "KHM";
pub const SOUTH_KOREA: &str = "KOR";
pub const KOSOVO: &str = "CS-KM";
pub const KUWAIT: &str = "KWT";
pub const LAOS: &str = "LAO";
pub const LEBANON: &str = "LBN";
pub const LIBERIA: &str = "LBR";
pub const LIBYA: &str = "LBY";
pub const SRI_LANKA: &str = "LKA";
pub const LESOTHO: &str = "LSO";
pub const LITHUANIA: &str = "LTU";
pub const LUXEMBOURG: &str = "LUX";
pub const LATVIA: &str = "LVA";
pub const MOROCCO: &str = "MAR";
pub const MOLDOVA: &str = "MDA";
pub const MADAGASCAR: &str = "MDG";
pub const MEXICO: &str = "MEX";
pub const MACEDONIA: &str = "MKD";
pub const MALI: &str = "MLI";
pub const MALTA: &str = "MLT";
pub const MYANMAR: &str = "MMR";
pub const MONTENEGRO: &str = "MNE";
pub const MONGOLIA: &str = "MNG";
pub const MOZAMBIQUE: &str = "MOZ";
pub const MAURITANIA: &str = "MRT";
pub const MALAWI: &str = "MWI";
pub const MALAYSIA: &str = "MYS";
pub const NAMIBIA: &str = "NAM";
pub const NEW_CALEDONIA: &str = "NCL";
pub const NIGER: &str = "NER";
pub const NIGERIA: &str = "NGA";
pub const NICARAGUA: &str = "NIC";
pub const NETHERLANDS: &str = "NLD";
pub const NORWAY: &str = "NOR";
pub const NEPAL: &str = "NPL";
pub const NEW_ZEALAND: &str = "NZL";
pub const OMAN: &str = "OMN";
pub const PAKISTAN: &str = "PAK";
pub const PANAMA: &str = "PAN";
pub const PERU: &str = "PER";
pub const PHILIPPINES: &str = "PHL";
pub const PAPUA_NEW_GUINEA: &str = "PNG";
pub const POLAND: &str = "POL";
pub const PUERTO_RICO: &str = "PRI";
pub const NORTH_KOREA: &str = "PRK";
pub const PORTUGAL: &str = "PRT";
pub const PARAGUAY: &str = "PRY";
pub const QATAR: &str = "QAT";
pub const ROMANIA: &str = "ROU";
pub const RUSSIA: &str = "RUS";
pub const RWANDA: &str = "RWA";
pub const WESTERN_SAHARA: &str = "ESH";
pub const SAUDI_ARABIA: &str = "SAU";
pub const SUDAN: &str = "SDN";
pub const SOUTH_SUDAN: &str = "SSD";
pub const SENEGAL: &str = "SEN";
pub const SOLOMON_ISLANDS: &str = "SLB";
pub const SIERRA_LEONE: &str = "SLE";
pub const EL_SALVADOR: &str = "SLV";
pub const SOMALILAND: &str = "-99";
pub const SOMALIA: &str = "SOM";
pub const REPUBLIC_OF_SERBIA: &str = "SRB";
pub const SURINAME: &str = "SUR";
pub const SLOVAKIA: &str = "SVK";
pub const SLOVENIA: &str = "SVN";
pub const SWEDEN: &str = "SWE";
pub const SWAZILAND: &str = "SWZ";
pub const SYRIA: &str = "SYR";
pub const CHAD: &str = "TCD";
pub const TOGO: &str = "TGO";
pub const THAILAND: &str = "THA";
pub const TAJIKISTAN: &str = "TJK";
pub const TURKMENISTAN: &str = "TKM";
pub const EAST_TIMOR: &str = "TLS";
pub const TRINIDAD_AND_TOBAGO: &str = "TTO";
pub const TUNISIA: &str = "TUN";
pub const TURKEY: &str = "TUR";
pub const TAIWAN: &str = "TWN";
pub const UNITED_REPUBLIC_OF_TANZANIA: &str = "TZA";
pub const UGANDA: &str = "UGA";
pub const UKRAINE: &str = "UKR";
pub const URUGUAY: &str = "URY";
pub const UNITED_STATES_OF_AMERICA: &str = "USA";
pub const UZBEKISTAN: &str = "UZB";
pub const VENEZUELA: &str = "VEN";
pub const VIETNAM: &str = "VNM";
pub const VANUATU: &str = "VUT";
pub const WEST_BANK: &str = "PSE";
pub const YEMEN: &str = "YEM";
pub const SOUTH_AFRICA: &str = "ZAF";
pub const ZAMBIA: &str = "ZMB";
pub const ZIMBABWE: &str = "ZWE";

/// Human readable name and code, in dataset order
pub const CATALOG: &[(&str, &str)] = &[
    ("Afghanistan", AFGHANISTAN),
    ("Angola", ANGOLA),
    ("Albania", ALBANIA),
    ("United Arab Emirates", UNITED_ARAB_EMIRATES),
    ("Argentina", ARGENTINA),
    ("Armenia", ARMENIA),
    ("Antarctica", ANTARCTICA),
    ("French Southern and Antarctic Lands", FRENCH_SOUTHERN_AND_ANTARCTIC_LANDS),
    ("Australia", AUSTRALIA),
    ("Austria", AUSTRIA),
    ("Azerbaijan", AZERBAIJAN),
    ("Burundi", BURUNDI),
    ("Belgium", BELGIUM),
    ("Benin", BENIN),
    ("Burkina Faso", BURKINA_FASO),
    ("Bangladesh", BANGLADESH),
    ("Bulgaria", BULGARIA),
    ("The Bahamas", THE_BAHAMAS),
    ("Bosnia and Herzegovina", BOSNIA_AND_HERZEGOVINA),
    ("Belarus", BELARUS),
    ("Belize", BELIZE),
    ("Bermuda", BERMUDA),
    ("Bolivia", BOLIVIA),
    ("Brazil", BRAZIL),
    ("Brunei", BRUNEI),
    ("Bhutan", BHUTAN),
    ("Botswana", BOTSWANA),
    ("Central African Republic", CENTRAL_AFRICAN_REPUBLIC),
    ("Canada", CANADA),
    ("Switzerland", SWITZERLAND),
    ("Chile", CHILE),
    ("China", CHINA),
    ("Ivory Coast", IVORY_COAST),
    ("Cameroon", CAMEROON),
    ("Democratic Republic of the Congo", DEMOCRATIC_REPUBLIC_OF_THE_CONGO),
    ("Republic of the Congo", REPUBLIC_OF_THE_CONGO),
    ("Colombia", COLOMBIA),
    ("Costa Rica", COSTA_RICA),
    ("Cuba", CUBA),
    ("Northern Cyprus", NORTHERN_CYPRUS),
    ("Cyprus", CYPRUS),
    ("Czech Republic", CZECH_REPUBLIC),
    ("Germany", GERMANY),
    ("Djibouti", DJIBOUTI),
    ("Denmark", DENMARK),
    ("Dominican Republic", DOMINICAN_REPUBLIC),
    ("Algeria", ALGERIA),
    ("Ecuador", ECUADOR),
    ("Egypt", EGYPT),
    ("Eritrea", ERITREA),
    ("Spain", SPAIN),
    ("Estonia", ESTONIA),
    ("Ethiopia", ETHIOPIA),
    ("Finland", FINLAND),
    ("Fiji", FIJI),
    ("Falkland Islands", FALKLAND_ISLANDS),
    ("France", FRANCE),
    ("Gabon", GABON),
    ("United Kingdom", UNITED_KINGDOM),
    ("Georgia", GEORGIA),
    ("Ghana", GHANA),
    ("Guinea", GUINEA),
    ("Gambia", GAMBIA),
    ("Guinea Bissau", GUINEA_BISSAU),
    ("Equatorial Guinea", EQUATORIAL_GUINEA),
    ("Greece", GREECE),
    ("Greenland", GREENLAND),
    ("Guatemala", GUATEMALA),
    ("French Guiana", FRENCH_GUIANA),
    ("Guyana", GUYANA),
    ("Honduras", HONDURAS),
    ("Croatia", CROATIA),
    ("Haiti", HAITI),
    ("Hungary", HUNGARY),
    ("Indonesia", INDONESIA),
    ("India", INDIA),
    ("Ireland", IRELAND),
    ("Iran", IRAN),
    ("Iraq", IRAQ),
    ("Iceland", ICELAND),
    ("Israel", ISRAEL),
    ("Italy", ITALY),
    ("Jamaica", JAMAICA),
    ("Jordan", JORDAN),
    ("Japan", JAPAN),
    ("Kazakhstan", KAZAKHSTAN),
    ("Kenya", KENYA),
    ("Kyrgyzstan", KYRGYZSTAN),
    ("Cambodia", CAMBODIA),
    ("South Korea", SOUTH_KOREA),
    ("Kosovo", KOSOVO),
    ("Kuwait", KUWAIT),
    ("Laos", LAOS),
    ("Lebanon", LEBANON),
    ("Liberia", LIBERIA),
    ("Libya", LIBYA),
    ("Sri Lanka", SRI_LANKA),
    ("Lesotho", LESOTHO),
    ("Lithuania", LITHUANIA),
    ("Luxembourg", LUXEMBOURG),
    ("Latvia", LATVIA),
    ("Morocco", MOROCCO),
    ("Moldova", MOLDOVA),
    ("Madagascar", MADAGASCAR),
    ("Mexico", MEXICO),
    ("Macedonia", MACEDONIA),
    ("Mali", MALI),
    ("Malta", MALTA),
    ("Myanmar", MYANMAR),
    ("Montenegro", MONTENEGRO),
    ("Mongolia", MONGOLIA),
    ("Mozambique", MOZAMBIQUE),
    ("Mauritania", MAURITANIA),
    ("Malawi", MALAWI),
    ("Malaysia", MALAYSIA),
    ("Namibia", NAMIBIA),
    ("New Caledonia", NEW_CALEDONIA),
    ("Niger", NIGER),
    ("Nigeria", NIGERIA),
    ("Nicaragua", NICARAGUA),
    ("Netherlands", NETHERLANDS),
    ("Norway", NORWAY),
    ("Nepal", NEPAL),
    ("New Zealand", NEW_ZEALAND),
    ("Oman", OMAN),
    ("Pakistan", PAKISTAN),
    ("Panama", PANAMA),
    ("Peru", PERU),
    ("Philippines", PHILIPPINES),
    ("Papua New Guinea", PAPUA_NEW_GUINEA),
    ("Poland", POLAND),
    ("Puerto Rico", PUERTO_RICO),
    ("North Korea", NORTH_KOREA),
    ("Portugal", PORTUGAL),
    ("Paraguay", PARAGUAY),
    ("Qatar", QATAR),
    ("Romania", ROMANIA),
    ("Russia", RUSSIA),
    ("Rwanda", RWANDA),
    ("Western Sahara", WESTERN_SAHARA),
    ("Saudi Arabia", SAUDI_ARABIA),
    ("Sudan", SUDAN),
    ("South Sudan", SOUTH_SUDAN),
    ("Senegal", SENEGAL),
    ("Solomon Islands", SOLOMON_ISLANDS),
    ("Sierra Leone", SIERRA_LEONE),
    ("El Salvador", EL_SALVADOR),
    ("Somaliland", SOMALILAND),
    ("Somalia", SOMALIA),
    ("Republic of Serbia", REPUBLIC_OF_SERBIA),
    ("Suriname", SURINAME),
    ("Slovakia", SLOVAKIA),
    ("Slovenia", SLOVENIA),
    ("Sweden", SWEDEN),
    ("Swaziland", SWAZILAND),
    ("Syria", SYRIA),
    ("Chad", CHAD),
    ("Togo", TOGO),
    ("Thailand", THAILAND),
    ("Tajikistan", TAJIKISTAN),
    ("Turkmenistan", TURKMENISTAN),
    ("East Timor", EAST_TIMOR),
    ("Trinidad and Tobago", TRINIDAD_AND_TOBAGO),
    ("Tunisia", TUNISIA),
    ("Turkey", TURKEY),
    ("Taiwan", TAIWAN),
    ("United Republic of Tanzania", UNITED_REPUBLIC_OF_TANZANIA),
    ("Uganda", UGANDA),
    ("Ukraine", UKRAINE),
    ("Uruguay", URUGUAY),
    ("United States of America", UNITED_STATES_OF_AMERICA),
    ("Uzbekistan", UZBEKISTAN),
    ("Venezuela", VENEZUELA),
    ("Vietnam", VIETNAM),
    ("Vanuatu", VANUATU),
    ("West Bank", WEST_BANK),
    ("Yemen", YEMEN),
    ("South Africa", SOUTH_AFRICA),
    ("Zambia", ZAMBIA),
    ("Zimbabwe", ZIMBABWE),
];

/// Look up a code by its human readable name, ignoring case
pub fn code_for(name: &str) -> Option<&'static str> {
    CATALOG
        .iter()
        .find(|(entry, _)| entry.eq_ignore_ascii_case(name))
        .map(|&(_, code)| code)
}
