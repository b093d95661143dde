//! Raw event-type label lookup table.
//!
//! Keys are lower-cased labels exactly as they occur in the Storm Events
//! export, including stray leading/trailing whitespace, misspellings and the
//! dated "summary" placeholder rows. Values are canonical categories.

use std::collections::BTreeMap;
use std::sync::LazyLock;

pub(crate) static EVENT_TYPES: LazyLock<BTreeMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        BTreeMap::from([
            ("astronomical low tide", "astronomical tide"),
            ("astronomical high tide", "astronomical tide"),
            ("blow-out tide", "astronomical tide"),
            ("blow-out tides", "astronomical tide"),
            ("high tides", "astronomical tide"),
            ("low tide", "astronomical tide"),

            ("avalanche", "avalanche"),
            ("avalance", "avalanche"),
            ("avalanches", "avalanche"),

            ("blizzard", "blizzard"),
            ("ground blizzard", "blizzard"),
            ("blizzard summary", "blizzard"),
            ("blizzard/high wind", "blizzard"),

            ("coastal flood", "coastal flood"),
            ("coastal flooding", "coastal flood"),
            (" coastal flood", "coastal flood"),
            ("coastalflood", "coastal flood"),
            ("coastal  flooding/erosion", "coastal flood"),
            ("coastal flooding/erosion", "coastal flood"),
            ("coastal erosion", "coastal flood"),
            ("erosion/cstl flood", "coastal flood"),
            ("cstl flooding/erosion", "coastal flood"),
            ("lakeshore flood", "coastal flood"),
            ("lake flood", "coastal flood"),
            ("beach erosion", "coastal flood"),
            ("tidal flooding", "coastal flood"),
            ("coastal flood/erosion", "coastal flood"),

            ("debris flow", "debris flow"),
            ("landslide", "debris flow"),
            ("landslides", "debris flow"),
            ("mudslide", "debris flow"),
            ("mudslides", "debris flow"),
            ("mud slide", "debris flow"),
            ("mudslide/landslide", "debris flow"),
            ("landslump", "debris flow"),
            ("rock slide", "debris flow"),
            ("mud/rock slide", "debris flow"),
            ("landspout", "debris flow"),

            ("dense fog", "dense fog"),
            ("fog", "dense fog"),
            ("freezing fog", "dense fog"),
            ("patchy dense fog", "dense fog"),
            ("ice fog", "dense fog"),

            ("dense smoke", "dense smoke"),
            ("smoke", "dense smoke"),

            ("drought", "drought"),
            ("abnormally dry", "drought"),
            ("dry conditions", "drought"),
            ("dry spell", "drought"),
            ("dry weather", "drought"),
            ("very dry", "drought"),
            ("driest month", "drought"),
            ("excessively dry", "drought"),
            ("unseasonably dry", "drought"),
            ("dryness", "drought"),
            ("record dry month", "drought"),
            ("drought/excessive heat", "drought"),
            ("dry", "drought"),

            ("dust storm", "dust storm"),
            ("dust devil", "dust storm"),
            ("dust devel", "dust storm"),
            ("blowing dust", "dust storm"),
            ("saharan dust", "dust storm"),
            ("dust storm/high winds", "dust storm"),
            ("duststorm", "dust storm"),

            ("extreme cold/wind chill", "extreme cold/wind chill"),
            ("extreme cold", "extreme cold/wind chill"),
            ("extreme windchill", "extreme cold/wind chill"),
            ("extreme wind chill", "extreme cold/wind chill"),
            ("extreme windchill temperatures", "extreme cold/wind chill"),
            ("cold/wind chill", "extreme cold/wind chill"),
            ("cold", "extreme cold/wind chill"),
            ("cold weather", "extreme cold/wind chill"),
            ("cold temperature", "extreme cold/wind chill"),
            ("cold and snow", "extreme cold/wind chill"),
            ("cold wind chill temperatures", "extreme cold/wind chill"),
            ("extended cold", "extreme cold/wind chill"),
            ("unseasonably cold", "extreme cold/wind chill"),
            ("unseasonable cold", "extreme cold/wind chill"),
            ("unusually cold", "extreme cold/wind chill"),
            ("record cold", "extreme cold/wind chill"),
            ("prolonged cold", "extreme cold/wind chill"),
            ("bitter wind chill", "extreme cold/wind chill"),
            ("bitter wind chill temperatures", "extreme cold/wind chill"),
            ("wind chill", "extreme cold/wind chill"),
            ("extreme cold/wind chill temperatures", "extreme cold/wind chill"),
            ("hypothermia/exposure", "extreme cold/wind chill"),
            ("hypothermia", "extreme cold/wind chill"),
            ("cold and wet conditions", "extreme cold/wind chill"),
            ("record low", "extreme cold/wind chill"),
            ("low temperature", "extreme cold/wind chill"),
            ("unseasonal low temp", "extreme cold/wind chill"),
            ("excessive cold", "extreme cold/wind chill"),
            ("wind chill/high wind", "extreme cold/wind chill"),

            ("flash flood", "flash flood"),
            (" flash flood", "flash flood"),
            ("flash flooding", "flash flood"),
            ("flash flood/flood", "flash flood"),
            ("flood/flash/flood", "flash flood"),
            ("flash flood/ street", "flash flood"),
            ("flash flood/landslide", "flash flood"),
            ("flash flood/ flood", "flash flood"),
            ("flash floods", "flash flood"),
            ("flood/flash flood", "flash flood"),
            ("flash flood from ice jams", "flash flood"),
            ("ice jam flood (minor", "flash flood"),
            ("ice jam flooding", "flash flood"),
            ("rapidly rising water", "flash flood"),
            ("dam break", "flash flood"),
            ("dam failure", "flash flood"),

            ("flood", "flood"),
            ("flooding", "flood"),
            ("river flood", "flood"),
            ("river flooding", "flood"),
            ("urban flood", "flood"),
            ("urban flooding", "flood"),
            ("urban/sml stream fld", "flood"),
            ("urban/small stream flood", "flood"),
            ("urban small stream flood", "flood"),
            ("urban/sml stream fldg", "flood"),
            ("urban/small strm fldg", "flood"),
            ("small stream flood", "flood"),
            ("sml stream fld", "flood"),
            ("street flooding", "flood"),
            ("street flood", "flood"),
            ("minor flooding", "flood"),
            ("flood/strong wind", "flood"),
            ("floods", "flood"),
            ("river and stream flood", "flood"),
            ("urban/street flooding", "flood"),
            ("urban and small stream floodin", "flood"),
            ("snowmelt flooding", "flood"),
            ("ice jam", "flood"),
            ("high water", "flood"),
            ("major flood", "flood"),
            ("flood/rain/wind", "flood"),

            ("frost/freeze", "frost/freeze"),
            ("frost", "frost/freeze"),
            ("freeze", "frost/freeze"),
            ("frost\\freeze", "frost/freeze"),
            ("damaging freeze", "frost/freeze"),
            ("early frost", "frost/freeze"),
            ("early freeze", "frost/freeze"),
            ("hard freeze", "frost/freeze"),
            ("first frost", "frost/freeze"),
            ("agricultural freeze", "frost/freeze"),
            ("unseasonable freeze", "frost/freeze"),
            ("black ice", "frost/freeze"),
            ("freezing drizzle", "frost/freeze"),
            ("freezing rain", "frost/freeze"),
            ("light freezing rain", "frost/freeze"),
            ("freezing spray", "frost/freeze"),
            ("glaze", "frost/freeze"),
            ("icy roads", "frost/freeze"),
            ("ice roads", "frost/freeze"),
            ("ice on road", "frost/freeze"),
            ("patchy ice", "frost/freeze"),
            ("ice", "frost/freeze"),

            ("funnel cloud", "funnel cloud"),
            ("funnel clouds", "funnel cloud"),
            ("wall cloud", "funnel cloud"),
            ("funnel", "funnel cloud"),
            ("cold air funnel", "funnel cloud"),
            ("cold air funnels", "funnel cloud"),
            ("rotating wall cloud", "funnel cloud"),

            ("hail", "hail"),
            ("small hail", "hail"),
            ("hail/wind", "hail"),
            ("thunderstorm wind/hail", "hail"),
            ("non severe hail", "hail"),
            ("hail 0.75", "hail"),
            ("hail(0.75)", "hail"),
            ("hailstorm", "hail"),
            ("gusty wind/hail", "hail"),

            ("heat", "heat"),
            ("excessive heat", "heat"),
            ("heat wave", "heat"),
            ("record heat", "heat"),
            ("extreme heat", "heat"),
            ("unseasonably warm", "heat"),
            ("unusually warm", "heat"),
            ("very warm", "heat"),
            ("record warmth", "heat"),
            ("record warm", "heat"),
            ("warm weather", "heat"),
            ("hot weather", "heat"),
            ("unseasonably hot", "heat"),
            ("prolonged warmth", "heat"),
            ("record high", "heat"),
            ("hot spell", "heat"),
            ("record temperature", "heat"),
            ("record temperatures", "heat"),
            ("warm spell", "heat"),
            ("temperature record", "heat"),
            ("abnormal warmth", "heat"),
            ("unusual warmth", "heat"),
            ("heatburst", "heat"),
            ("hyperthermia/exposure", "heat"),

            ("heavy rain", "heavy rain"),
            ("rain", "heavy rain"),
            ("heavy rains", "heavy rain"),
            ("hvy rain", "heavy rain"),
            ("torrential rainfall", "heavy rain"),
            ("excessive rainfall", "heavy rain"),
            ("record rainfall", "heavy rain"),
            ("unseasonal rain", "heavy rain"),
            ("heavy rain/high surf", "heavy rain"),
            ("heavy rain and wind", "heavy rain"),
            ("rain (heavy)", "heavy rain"),
            ("locally heavy rain", "heavy rain"),
            ("heavy precipitation", "heavy rain"),
            ("excessive rain", "heavy rain"),
            ("prolonged rain", "heavy rain"),
            ("monthly rainfall", "heavy rain"),
            ("rain/snow", "heavy rain"),
            ("heavy rain/lightning", "heavy rain"),
            ("wet month", "heavy rain"),
            ("wet year", "heavy rain"),
            ("record precipitation", "heavy rain"),
            ("unseasonably wet", "heavy rain"),
            ("abnormally wet", "heavy rain"),
            ("extremely wet", "heavy rain"),
            ("heavy shower", "heavy rain"),
            ("torrential rain", "heavy rain"),

            ("heavy snow", "heavy snow"),
            ("snow", "heavy snow"),
            ("excessive snow", "heavy snow"),
            ("record snow", "heavy snow"),
            ("snow squall", "heavy snow"),
            ("snow squalls", "heavy snow"),
            ("heavy snow shower", "heavy snow"),
            ("snow/blowing snow", "heavy snow"),
            ("blowing snow", "heavy snow"),
            ("snow and ice", "heavy snow"),
            ("snow/ice", "heavy snow"),
            ("heavy snow squalls", "heavy snow"),
            ("snow accumulation", "heavy snow"),
            ("late season snow", "heavy snow"),
            ("early snow", "heavy snow"),
            ("first snow", "heavy snow"),
            ("moderate snowfall", "heavy snow"),
            ("snow shower", "heavy snow"),
            ("snowfall record", "heavy snow"),
            ("monthly snowfall", "heavy snow"),
            ("seasonal snowfall", "heavy snow"),
            ("record snowfall", "heavy snow"),
            ("accumulated snowfall", "heavy snow"),
            ("late snow", "heavy snow"),
            ("snow advisory", "heavy snow"),
            ("unusually late snow", "heavy snow"),
            ("light snow", "heavy snow"),
            ("light snowfall", "heavy snow"),
            ("heavy snow/blizzard", "heavy snow"),

            ("high surf", "high surf"),
            ("heavy surf", "high surf"),
            ("heavy surf/high surf", "high surf"),
            ("high surf advisory", "high surf"),
            ("rough surf", "high surf"),
            ("hazardous surf", "high surf"),
            ("   high surf advisory", "high surf"),
            ("heavy surf and wind", "high surf"),
            ("high waves", "high surf"),
            ("rogue wave", "high surf"),
            ("heavy seas", "high surf"),
            ("rough seas", "high surf"),
            ("high seas", "high surf"),
            ("high swells", "high surf"),

            ("high wind", "high wind"),
            ("high winds", "high wind"),
            ("wind damage", "high wind"),
            ("high wind (g40)", "high wind"),
            ("high wind damage", "high wind"),
            ("gradient wind", "high wind"),
            ("wind advisory", "high wind"),
            ("wind gusts", "high wind"),
            ("non-severe wind damage", "high wind"),
            ("whirlwind", "high wind"),
            ("downburst", "high wind"),
            ("microburst", "high wind"),
            ("dry microburst", "high wind"),
            ("high wind and seas", "high wind"),
            ("high winds/snow", "high wind"),

            ("hurricane/typhoon", "hurricane/typhoon"),
            ("hurricane", "hurricane/typhoon"),
            ("typhoon", "hurricane/typhoon"),
            ("hurricane edouard", "hurricane/typhoon"),
            ("hurricane opal", "hurricane/typhoon"),
            ("hurricane erin", "hurricane/typhoon"),
            ("hurricane felix", "hurricane/typhoon"),
            ("hurricane gordon", "hurricane/typhoon"),
            ("hurricane opal/high winds", "hurricane/typhoon"),
            ("remnants of floyd", "hurricane/typhoon"),

            ("ice storm", "ice storm"),
            ("ice storms", "ice storm"),
            ("ice/snow", "ice storm"),
            ("sleet/ice storm", "ice storm"),
            ("glaze/ice storm", "ice storm"),
            ("ice storm/flash flood", "ice storm"),

            ("lake-effect snow", "lake-effect snow"),
            ("lake effect snow", "lake-effect snow"),
            ("heavy lake snow", "lake-effect snow"),

            ("lightning", "lightning"),
            (" lightning", "lightning"),
            ("lighting", "lightning"),
            ("lightning fire", "lightning"),
            ("lightning injury", "lightning"),
            ("lightning  wauseon", "lightning"),
            ("lightning and heavy rain", "lightning"),
            ("lightning damage", "lightning"),

            ("marine hail", "marine hail"),

            ("marine high wind", "marine high wind"),

            ("marine strong wind", "marine strong wind"),

            ("marine thunderstorm wind", "marine thunderstorm wind"),
            ("marine tstm wind", "marine thunderstorm wind"),

            ("rip current", "rip current"),
            ("rip currents", "rip current"),
            ("rip currents/heavy surf", "rip current"),
            ("rip current/heavy surf", "rip current"),

            ("seiche", "seiche"),

            ("storm surge/tide", "storm surge/tide"),
            ("storm surge", "storm surge/tide"),
            ("coastal storm", "storm surge/tide"),
            ("coastalstorm", "storm surge/tide"),
            ("coastal surge", "storm surge/tide"),
            ("tidal surge", "storm surge/tide"),
            ("high tide", "storm surge/tide"),
            ("storm tide", "storm surge/tide"),

            ("strong wind", "strong wind"),
            ("strong winds", "strong wind"),
            ("wind", "strong wind"),
            ("winds", "strong wind"),
            ("gusty wind", "strong wind"),
            ("gusty winds", "strong wind"),
            ("gusty lake wind", "strong wind"),
            ("strong wind gust", "strong wind"),
            ("wnd", "strong wind"),
            ("wind and wave", "strong wind"),
            ("gusty wind/rain", "strong wind"),
            ("gusty wind/hvy rain", "strong wind"),

            ("thunderstorm wind", "thunderstorm wind"),
            ("tstm wind", "thunderstorm wind"),
            (" tstm wind", "thunderstorm wind"),
            ("tstm wind ", "thunderstorm wind"),
            ("tstm wind (g45)", "thunderstorm wind"),
            (" tstm wind (g45)", "thunderstorm wind"),
            ("tstm wind (g40)", "thunderstorm wind"),
            ("tstm wind (g35)", "thunderstorm wind"),
            ("tstm wind (41)", "thunderstorm wind"),
            ("tstm wind 40", "thunderstorm wind"),
            ("tstm wind 45", "thunderstorm wind"),
            ("tstm wind g45", "thunderstorm wind"),
            ("tstm wind  (g45)", "thunderstorm wind"),
            ("tstm wind and lightning", "thunderstorm wind"),
            ("tstm wind/hail", "thunderstorm wind"),
            ("thunderstorm", "thunderstorm wind"),
            ("thunderstorms", "thunderstorm wind"),
            ("thunderstorm winds", "thunderstorm wind"),
            ("thunderstorm wind (g40)", "thunderstorm wind"),
            ("tstm winds", "thunderstorm wind"),
            ("tstm", "thunderstorm wind"),
            ("tstm heavy rain", "thunderstorm wind"),
            ("severe thunderstorm", "thunderstorm wind"),
            ("severe thunderstorms", "thunderstorm wind"),
            ("severe thunderstorm winds", "thunderstorm wind"),
            ("thunderstorm wind g45", "thunderstorm wind"),
            ("non-tstm wind", "thunderstorm wind"),
            ("non tstm wind", "thunderstorm wind"),
            ("dry microburst winds", "thunderstorm wind"),
            ("wet microburst", "thunderstorm wind"),
            ("microburst winds", "thunderstorm wind"),
            ("wake low wind", "thunderstorm wind"),
            ("thunderstorm wind and lightning", "thunderstorm wind"),
            ("tstm wind damage", "thunderstorm wind"),
            ("gusty thunderstorm wind", "thunderstorm wind"),
            ("gusty thunderstorm winds", "thunderstorm wind"),

            ("tornado", "tornado"),
            ("tornadoes", "tornado"),
            ("torndao", "tornado"),
            ("tornado f0", "tornado"),
            ("tornado f1", "tornado"),
            ("tornado f2", "tornado"),
            ("tornado f3", "tornado"),
            ("tornado/waterspout", "tornado"),
            ("waterspout/tornado", "tornado"),
            ("waterspout-tornado", "tornado"),
            ("gustnado", "tornado"),
            ("gustnado and", "tornado"),

            ("tropical storm", "tropical storm"),
            ("tropical depression", "tropical storm"),
            ("tropical storm jerry", "tropical storm"),
            ("tropical storm dean", "tropical storm"),
            ("tropical storm gordon", "tropical storm"),
            ("tropical storm alberto", "tropical storm"),

            ("tsunami", "tsunami"),

            ("volcanic ash", "volcanic ash"),
            ("volcanic ashfall", "volcanic ash"),
            ("volcanic eruption", "volcanic ash"),
            ("volcanic ash plume", "volcanic ash"),
            ("vog", "volcanic ash"),

            ("waterspout", "waterspout"),
            ("waterspouts", "waterspout"),
            ("water spout", "waterspout"),
            ("waterspout funnel cloud", "waterspout"),

            ("wildfire", "wildfire"),
            ("wild/forest fire", "wildfire"),
            ("wildfires", "wildfire"),
            ("wild/forest fires", "wildfire"),
            ("forest fires", "wildfire"),
            ("brush fire", "wildfire"),
            ("grass fires", "wildfire"),
            ("wild fires", "wildfire"),
            ("red flag fire wx", "wildfire"),
            ("red flag criteria", "wildfire"),

            ("winter storm", "winter storm"),
            ("winter storms", "winter storm"),
            ("winter storm high winds", "winter storm"),
            ("snowstorm", "winter storm"),
            ("heavy snow/winter storm", "winter storm"),
            ("winter storm/high wind", "winter storm"),

            ("winter weather", "winter weather"),
            ("winter weather/mix", "winter weather"),
            ("winter weather mix", "winter weather"),
            ("wintry mix", "winter weather"),
            ("wintery mix", "winter weather"),
            ("winter mix", "winter weather"),
            ("mixed precipitation", "winter weather"),
            ("mixed precip", "winter weather"),
            ("sleet", "winter weather"),
            ("sleet storm", "winter weather"),
            ("freezing rain/sleet", "winter weather"),
            ("snow/sleet", "winter weather"),
            ("snow and sleet", "winter weather"),
            ("snow/freezing rain", "winter weather"),
            ("freezing rain/snow", "winter weather"),
            ("rain/freezing rain", "winter weather"),
            ("sleet/freezing rain", "winter weather"),
            ("snow/rain", "winter weather"),

            ("other", "other"),
            ("none", "other"),
            ("?", "other"),
            ("apache county", "other"),
            ("northern lights", "other"),
            ("drowning", "other"),
            ("marine accident", "other"),
            ("marine mishap", "other"),
            ("accident", "other"),
            ("remnants of hurricane", "other"),
            ("no severe weather", "other"),
            ("southeast", "other"),
            ("excessive", "other"),
            ("high", "other"),
            ("mild pattern", "other"),
            ("monthly temperature", "other"),
            ("temperature", "other"),
            ("record cool", "other"),
            ("cool spell", "other"),
            ("unseasonably cool", "other"),
            ("unusually cool", "other"),
            ("cool and wet", "other"),
            ("vog smog", "other"),
            ("summary august 10", "other"),
            ("summary august 11", "other"),
            ("summary august 17", "other"),
            ("summary august 2-3", "other"),
            ("summary august 21", "other"),
            ("summary august 28", "other"),
            ("summary august 4", "other"),
            ("summary august 7", "other"),
            ("summary august 9", "other"),
            ("summary jan 17", "other"),
            ("summary july 23-24", "other"),
            ("summary june 18-19", "other"),
            ("summary june 5-6", "other"),
            ("summary june 6", "other"),
            ("summary of april 12", "other"),
            ("summary of april 13", "other"),
            ("summary of april 21", "other"),
            ("summary of april 27", "other"),
            ("summary of april 3rd", "other"),
            ("summary of august 1", "other"),
            ("summary of july 11", "other"),
            ("summary of july 2", "other"),
            ("summary of july 22", "other"),
            ("summary of july 26", "other"),
            ("summary of july 29", "other"),
            ("summary of july 3", "other"),
            ("summary of june 10", "other"),
            ("summary of june 11", "other"),
            ("summary of june 12", "other"),
            ("summary of june 13", "other"),
            ("summary of june 15", "other"),
            ("summary of june 16", "other"),
            ("summary of june 18", "other"),
            ("summary of june 23", "other"),
            ("summary of june 24", "other"),
            ("summary of june 3", "other"),
            ("summary of june 30", "other"),
            ("summary of june 4", "other"),
            ("summary of june 6", "other"),
            ("summary of march 14", "other"),
            ("summary of march 23", "other"),
            ("summary of march 24", "other"),
            ("summary of march 24-25", "other"),
            ("summary of march 27", "other"),
            ("summary of march 29", "other"),
            ("summary of may 10", "other"),
            ("summary of may 13", "other"),
            ("summary of may 14", "other"),
            ("summary of may 22", "other"),
            ("summary of may 22 am", "other"),
            ("summary of may 22 pm", "other"),
            ("summary of may 26 am", "other"),
            ("summary of may 26 pm", "other"),
            ("summary of may 31 am", "other"),
            ("summary of may 31 pm", "other"),
            ("summary of may 9-10", "other"),
            ("summary sept. 25-26", "other"),
            ("summary september 20", "other"),
            ("summary september 23", "other"),
            ("summary september 3", "other"),
            ("summary september 4", "other"),
            ("summary: nov. 16", "other"),
            ("summary: nov. 6-7", "other"),
            ("summary: oct. 20-21", "other"),
            ("summary: october 31", "other"),
            ("summary: sept. 18", "other"),
        ])
    });
